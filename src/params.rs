use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value substituted into a `:name` placeholder: text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Int(value) => write!(f, "{value}"),
            ParamValue::UInt(value) => write!(f, "{value}"),
            ParamValue::Float(value) => write_float(f, *value),
        }
    }
}

// Floats print the way a path segment is expected to read: `1.0` as `1`,
// `-0.0` as `0`, non-finite values spelled out.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{value}")
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

macro_rules! impl_from_number {
    ($variant:ident, $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for ParamValue {
                fn from(value: $source) -> Self {
                    ParamValue::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_number!(Int, i64: i8, i16, i32, i64, isize, u8, u16, u32);
impl_from_number!(UInt, u64: u64, usize);
impl_from_number!(Float, f64: f32, f64);

/// Caller-supplied parameter mapping used at render time.
///
/// Keys not named by the template are ignored when rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: HashMap<Box<str>, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a value, returning the one previously stored under `name`.
    pub fn insert<K, V>(&mut self, name: K, value: V) -> Option<ParamValue>
    where
        K: AsRef<str>,
        V: Into<ParamValue>,
    {
        self.values.insert(name.as_ref().into(), value.into())
    }

    pub fn with<K, V>(mut self, name: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: Into<ParamValue>,
    {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(name, value)| (&**name, value))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: AsRef<str>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut params = Params::with_capacity(iter.size_hint().0);
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: AsRef<str>,
    V: Into<ParamValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Builds a [`Params`] mapping from `name => value` pairs.
///
/// ```
/// use route_template_rs::params;
///
/// let params = params! { "userId" => 1, "slug" => "hello" };
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert($name, $value);
        )+
        params
    }};
}
