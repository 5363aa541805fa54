use crate::config::Result;

/// Somewhere a configuration value can come from.
///
/// `None` means the source has nothing to say, so a fallback (see [`ConfigSource::or`]) gets a
/// chance.
pub trait ConfigSource: Sized {
    type Value;

    fn source_value(self) -> Option<Result<Self::Value>>;

    fn or<T: ConfigSource<Value = Self::Value>>(self, fallback: T) -> Or<Self, T> {
        Or::new(self, fallback)
    }
}

#[derive(Clone)]
pub struct Or<A, B>(A, B);

impl<A, B> Or<A, B>
where
    A: ConfigSource,
    B: ConfigSource<Value = A::Value>,
{
    fn new(first: A, fallback: B) -> Self {
        Or(first, fallback)
    }
}

impl<A, B> ConfigSource for Or<A, B>
where
    A: ConfigSource,
    B: ConfigSource<Value = A::Value>,
{
    type Value = A::Value;

    fn source_value(self) -> Option<Result<Self::Value>> {
        self.0.source_value().or_else(|| self.1.source_value())
    }
}

/// An explicitly provided value, e.g. from a command line flag.
impl<V> ConfigSource for Option<V> {
    type Value = V;

    fn source_value(self) -> Option<Result<Self::Value>> {
        self.map(Ok)
    }
}
