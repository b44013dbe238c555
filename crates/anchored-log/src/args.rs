use std::{borrow::Cow, rc::Rc, sync::Arc};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};


/// A single value passed alongside a format template.
///
/// Loggers receive arguments exactly as the caller supplied them; nothing is rendered until a
/// logger decides to render the message (see [`sprintf`]).
///
/// Values of ordinary types are converted with [`AsArg`]. Any other value can be passed by
/// reference with [`Arg::display`] or [`Arg::debug`].
///
/// [`sprintf`]: crate::sprintf
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    Str(&'a str),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Display(&'a dyn Display),
    Debug(&'a dyn Debug),
}

impl<'a> Arg<'a> {
    #[inline]
    #[must_use]
    pub fn display(value: &'a dyn Display) -> Self {
        Self::Display(value)
    }

    #[inline]
    #[must_use]
    pub fn debug(value: &'a dyn Debug) -> Self {
        Self::Debug(value)
    }

    /// The name printed for this argument's type in malformed-verb and `%T` output.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_)     => "string",
            Self::Int(_)     => "int",
            Self::Uint(_)    => "uint",
            Self::Float(_)   => "float",
            Self::Bool(_)    => "bool",
            Self::Char(_)    => "char",
            Self::Display(_) => "display",
            Self::Debug(_)   => "debug",
        }
    }

    #[inline]
    #[must_use]
    pub fn to_owned_arg(&self) -> OwnedArg {
        OwnedArg::from(*self)
    }
}

impl Debug for Arg<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Str(s)         => f.debug_tuple("Str").field(s).finish(),
            Self::Int(n)         => f.debug_tuple("Int").field(n).finish(),
            Self::Uint(n)        => f.debug_tuple("Uint").field(n).finish(),
            Self::Float(n)       => f.debug_tuple("Float").field(n).finish(),
            Self::Bool(b)        => f.debug_tuple("Bool").field(b).finish(),
            Self::Char(c)        => f.debug_tuple("Char").field(c).finish(),
            Self::Display(value) => f.debug_tuple("Display").field(&value.to_string()).finish(),
            Self::Debug(value)   => f.debug_tuple("Debug").field(value).finish(),
        }
    }
}

/// The `%v` rendering of the argument.
impl Display for Arg<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Str(s)         => f.write_str(s),
            Self::Int(n)         => Display::fmt(n, f),
            Self::Uint(n)        => Display::fmt(n, f),
            Self::Float(n)       => Display::fmt(n, f),
            Self::Bool(b)        => Display::fmt(b, f),
            Self::Char(c)        => Display::fmt(c, f),
            Self::Display(value) => Display::fmt(value, f),
            Self::Debug(value)   => Debug::fmt(value, f),
        }
    }
}

impl PartialEq<OwnedArg> for Arg<'_> {
    fn eq(&self, other: &OwnedArg) -> bool {
        self.to_owned_arg() == *other
    }
}

/// An owned copy of an [`Arg`], for loggers which keep arguments past the end of a call.
///
/// `Display` and `Debug` arguments are captured as their rendered text.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedArg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Display(String),
    Debug(DebugText),
}

impl OwnedArg {
    /// Borrow this value as an [`Arg`] again, so captured calls can be replayed.
    #[must_use]
    pub fn as_arg(&self) -> Arg<'_> {
        match self {
            Self::Str(s)     => Arg::Str(s),
            Self::Int(n)     => Arg::Int(*n),
            Self::Uint(n)    => Arg::Uint(*n),
            Self::Float(n)   => Arg::Float(*n),
            Self::Bool(b)    => Arg::Bool(*b),
            Self::Char(c)    => Arg::Char(*c),
            Self::Display(s) => Arg::Display(s),
            Self::Debug(s)   => Arg::Debug(s),
        }
    }
}

impl From<Arg<'_>> for OwnedArg {
    fn from(arg: Arg<'_>) -> Self {
        match arg {
            Arg::Str(s)         => Self::Str(s.to_owned()),
            Arg::Int(n)         => Self::Int(n),
            Arg::Uint(n)        => Self::Uint(n),
            Arg::Float(n)       => Self::Float(n),
            Arg::Bool(b)        => Self::Bool(b),
            Arg::Char(c)        => Self::Char(c),
            Arg::Display(value) => Self::Display(value.to_string()),
            Arg::Debug(value)   => Self::Debug(DebugText(format!("{value:?}"))),
        }
    }
}

/// The captured `{:?}` rendering of a value, which renders as the same text under `{:?}`.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct DebugText(String);

impl DebugText {
    #[inline]
    #[must_use]
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Debug for DebugText {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnedArg {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<i32> for OwnedArg {
    #[inline]
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u64> for OwnedArg {
    #[inline]
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

/// Values which can be passed to a [`Logger`] as format arguments.
///
/// The logging macros call this on a reference to each argument.
///
/// [`Logger`]: crate::Logger
pub trait AsArg {
    fn as_arg(&self) -> Arg<'_>;
}

impl AsArg for Arg<'_> {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        *self
    }
}

impl AsArg for OwnedArg {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        Self::as_arg(self)
    }
}

impl AsArg for str {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl AsArg for String {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl AsArg for Cow<'_, str> {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl AsArg for bool {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        Arg::Bool(*self)
    }
}

impl AsArg for char {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        Arg::Char(*self)
    }
}

impl AsArg for f32 {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        Arg::Float(f64::from(*self))
    }
}

impl AsArg for f64 {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        Arg::Float(*self)
    }
}

macro_rules! signed_as_arg {
    ($($int:ty),*) => {
        $(
            impl AsArg for $int {
                #[inline]
                fn as_arg(&self) -> Arg<'_> {
                    Arg::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! unsigned_as_arg {
    ($($int:ty),*) => {
        $(
            impl AsArg for $int {
                #[inline]
                fn as_arg(&self) -> Arg<'_> {
                    Arg::Uint(u64::from(*self))
                }
            }
        )*
    };
}

signed_as_arg!(i8, i16, i32, i64);
unsigned_as_arg!(u8, u16, u32, u64);

impl AsArg for isize {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        // Only fails on platforms with pointers wider than 64 bits.
        i64::try_from(*self)
            .map(Arg::Int)
            .unwrap_or(Arg::Display(self))
    }
}

impl AsArg for usize {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        u64::try_from(*self)
            .map(Arg::Uint)
            .unwrap_or(Arg::Display(self))
    }
}

impl<T: AsArg + ?Sized> AsArg for &T {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        T::as_arg(self)
    }
}

impl<T: AsArg + ?Sized> AsArg for Box<T> {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        T::as_arg(self)
    }
}

impl<T: AsArg + ?Sized> AsArg for Rc<T> {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        T::as_arg(self)
    }
}

impl<T: AsArg + ?Sized> AsArg for Arc<T> {
    #[inline]
    fn as_arg(&self) -> Arg<'_> {
        T::as_arg(self)
    }
}


#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;


    #[test]
    fn integers_widen() {
        assert!(matches!((-3_i8).as_arg(), Arg::Int(-3)));
        assert!(matches!(7_u16.as_arg(), Arg::Uint(7)));
        assert!(matches!(usize::MAX.as_arg(), Arg::Uint(n) if n == u64::MAX));
        assert!(matches!((-1_isize).as_arg(), Arg::Int(-1)));
    }

    #[test]
    fn strings_are_borrowed() {
        let owned = String::from("table-000012");
        let arg = owned.as_arg();
        let Arg::Str(borrowed) = arg else {
            panic!("expected a string argument, got {arg:?}");
        };
        assert!(std::ptr::eq(borrowed, owned.as_str()));

        assert!(matches!("build".as_arg(), Arg::Str("build")));
        assert!(matches!((&&"nested").as_arg(), Arg::Str("nested")));
    }

    #[test]
    fn owned_args_capture_rendered_text() {
        let path = Path::new("/var/db/LOG");
        let display = path.display();
        let captured = Arg::display(&display).to_owned_arg();
        assert_eq!(captured, OwnedArg::Display(String::from("/var/db/LOG")));

        let captured = Arg::debug(&Some(3)).to_owned_arg();
        assert_eq!(captured, OwnedArg::Debug(DebugText::new("Some(3)")));
    }

    #[test]
    fn owned_args_replay() {
        let path = Path::new("/var/db/LOG");
        let display = path.display();
        let owned = [
            OwnedArg::from("a"),
            OwnedArg::from(1),
            OwnedArg::Bool(true),
            Arg::display(&display).to_owned_arg(),
            Arg::debug(&Some(3)).to_owned_arg(),
        ];
        for arg in &owned {
            assert_eq!(arg.as_arg(), *arg);
        }
    }

    #[test]
    fn replayed_debug_values_keep_their_type() {
        let captured = Arg::debug(&Some(3)).to_owned_arg();
        let replayed = captured.as_arg();

        assert!(matches!(replayed, Arg::Debug(_)));
        assert_eq!(replayed.type_name(), "debug");
        assert_eq!(
            crate::sprintf("%v|%s|%T", &[replayed, replayed, replayed]),
            "Some(3)|Some(3)|debug",
        );
        assert_eq!(crate::sprintf("%x", &[replayed]), "%!x(debug=Some(3))");
    }

    #[test]
    fn type_names() {
        assert_eq!(1.5_f32.as_arg().type_name(), "float");
        assert_eq!('x'.as_arg().type_name(), "char");
        assert_eq!(Arg::debug(&()).type_name(), "debug");
    }
}
