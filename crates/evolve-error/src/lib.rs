use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

pub type EvolveResult<T> = Result<T, EvolveError>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidConfig,
    InvalidParameter,
    InvalidIndex,
    Crossover,
    MutatorConfig,
    AbsurdOperation,
    Evaluation,
    Multiple,
    Context,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrString(Cow<'static, str>);

impl AsRef<str> for ErrString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ErrString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ErrString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: Into<Cow<'static, str>>> From<T> for ErrString {
    fn from(v: T) -> Self {
        Self(v.into())
    }
}

/// The single error type threaded through every crate in this workspace.
///
/// Construction goes through [`evolve_err!`]/[`evolve_bail!`]/[`ensure!`] rather than a
/// `thiserror` derive; each variant carries a human-readable message rather than
/// structured payloads, matching how the rest of this codebase prefers a flat,
/// hand-written error surface over generated boilerplate.
#[derive(Debug)]
pub enum EvolveError {
    InvalidConfig {
        message: ErrString,
    },
    InvalidParameter {
        message: ErrString,
    },
    InvalidIndex {
        message: ErrString,
    },
    Crossover {
        message: ErrString,
    },
    MutatorConfig {
        message: ErrString,
    },
    /// A fallible, rejection-sampling operation (e.g. a filtered gene's `mutate`)
    /// exhausted its attempt budget without producing a valid result.
    AbsurdOperation {
        message: ErrString,
    },
    Evaluation {
        message: ErrString,
    },
    /// A composite of several individual constraint violations found in one
    /// validation pass (e.g. validating every chromosome factory in a genotype
    /// factory before reporting back to the caller).
    Multiple(MultiDisplay),

    Context {
        context: ErrorContext,
        source: Box<EvolveError>,
    },
}

impl EvolveError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            Self::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            Self::InvalidIndex { .. } => ErrorCode::InvalidIndex,
            Self::Crossover { .. } => ErrorCode::Crossover,
            Self::MutatorConfig { .. } => ErrorCode::MutatorConfig,
            Self::AbsurdOperation { .. } => ErrorCode::AbsurdOperation,
            Self::Evaluation { .. } => ErrorCode::Evaluation,
            Self::Multiple(_) => ErrorCode::Multiple,
            Self::Context { .. } => ErrorCode::Context,
        }
    }

    pub fn with_context(self, msg: impl Into<String>) -> Self {
        EvolveError::Context {
            context: ErrorContext::new(msg),
            source: Box::new(self),
        }
    }

    pub fn multiple(errors: Vec<EvolveError>) -> Self {
        EvolveError::Multiple(errors.into())
    }
}

impl Display for EvolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { message } => write!(f, "invalid configuration: {}", message),
            Self::InvalidParameter { message } => write!(f, "invalid parameter: {}", message),
            Self::InvalidIndex { message } => write!(f, "invalid index: {}", message),
            Self::Crossover { message } => write!(f, "crossover error: {}", message),
            Self::MutatorConfig { message } => write!(f, "mutator configuration error: {}", message),
            Self::AbsurdOperation { message } => write!(f, "absurd operation: {}", message),
            Self::Evaluation { message } => write!(f, "evaluation error: {}", message),
            Self::Multiple(m) => write!(f, "multiple errors:\n{}", m),
            Self::Context { context, source } => write!(f, "{}\nCaused by: {}", context, source),
        }
    }
}

impl std::error::Error for EvolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Context { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ErrorContext {
    message: String,
}

impl ErrorContext {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorContext {}

#[derive(Debug)]
pub struct MultiDisplay(Vec<EvolveError>);

impl MultiDisplay {
    pub fn errors(&self) -> &[EvolveError] {
        &self.0
    }
}

impl Display for MultiDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}] {} (code: {:?})", i, e, e.code())?;
        }
        Ok(())
    }
}

impl From<Vec<EvolveError>> for MultiDisplay {
    fn from(v: Vec<EvolveError>) -> Self {
        Self(v)
    }
}

pub trait ResultExt<T> {
    fn context(self, msg: impl Into<String>) -> EvolveResult<T>;
    fn with_context<F: FnOnce() -> String>(self, f: F) -> EvolveResult<T>;
}

impl<T, E: Into<EvolveError>> ResultExt<T> for Result<T, E> {
    fn context(self, msg: impl Into<String>) -> EvolveResult<T> {
        self.map_err(|e| e.into().with_context(msg))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> EvolveResult<T> {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[doc(hidden)]
pub mod __private {
    #[inline]
    #[cold]
    #[must_use]
    pub fn must_use<E>(e: E) -> E {
        e
    }
}

#[macro_export]
macro_rules! evolve_err {
    (InvalidConfig: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::EvolveError::InvalidConfig { message: format!($fmt, $($arg),*).into() })
    };
    (InvalidParameter: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::EvolveError::InvalidParameter { message: format!($fmt, $($arg),*).into() })
    };
    (InvalidIndex: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::EvolveError::InvalidIndex { message: format!($fmt, $($arg),*).into() })
    };
    (Crossover: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::EvolveError::Crossover { message: format!($fmt, $($arg),*).into() })
    };
    (MutatorConfig: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::EvolveError::MutatorConfig { message: format!($fmt, $($arg),*).into() })
    };
    (AbsurdOperation: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::EvolveError::AbsurdOperation { message: format!($fmt, $($arg),*).into() })
    };
    (Evaluation: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::EvolveError::Evaluation { message: format!($fmt, $($arg),*).into() })
    };
    ($variant:ident: $msg:expr $(,)?) => {{
        $crate::__private::must_use($crate::EvolveError::InvalidParameter { message: $msg.into() })
    }};
}

#[macro_export]
macro_rules! evolve_bail {
    ($($tt:tt)+) => { return Err($crate::evolve_err!($($tt)+)) };
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($tt:tt)+) => {
        if !$cond { $crate::evolve_bail!($($tt)+); }
    };
}
