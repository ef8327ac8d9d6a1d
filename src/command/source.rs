//! Sources of operator command lines.

/// Yields raw command lines, blocking until one is available.
///
/// Lines are handed over untrimmed; `None` means end of input.
pub trait CommandSource {
    /// Line type handed to the parser.
    type Line: AsRef<str>;

    /// Next raw line, or `None` at end of input.
    fn next_line(&mut self) -> Option<Self::Line>;
}

impl<S: CommandSource + ?Sized> CommandSource for &mut S {
    type Line = S::Line;

    fn next_line(&mut self) -> Option<Self::Line> {
        (**self).next_line()
    }
}

/// Command source replaying a fixed sequence of lines.
///
/// Useful for scripted sessions and tests.
#[derive(Debug, Clone)]
pub struct ScriptedSource<I> {
    lines: I,
}

impl<I> ScriptedSource<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Replay `lines` in order, then report end of input.
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl<I> CommandSource for ScriptedSource<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Line = I::Item;

    fn next_line(&mut self) -> Option<Self::Line> {
        self.lines.next()
    }
}
