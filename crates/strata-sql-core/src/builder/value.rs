//! SQL values and their literal rendering.
//!
//! Every native scalar is carried as a tagged [`SqlValue`] so the clause
//! formatters can pattern-match exhaustively instead of inspecting types at
//! runtime. A [`SqlValue::List`] is not a scalar: it represents an
//! `OR`-disjunction over one column and is expanded by the where formatter.

/// A SQL value used in a query description.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value. Rendered as `1`/`0` (SQLite has no boolean literal).
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// An ordered list of values, used as a disjunction in a where clause.
    /// Order is preserved exactly as given.
    List(Vec<SqlValue>),
}

impl SqlValue {
    /// Returns the SQL literal representation for inline use.
    ///
    /// Booleans coerce to `1`/`0`, `Null` to the bare `null` keyword, and
    /// text is single-quote wrapped with embedded quotes doubled. A float
    /// with zero fractional part renders in integer format. A `List` in a
    /// scalar position renders as a parenthesized, comma-separated list.
    #[must_use]
    pub fn to_sql_inline(&self) -> String {
        match self {
            Self::Null => String::from("null"),
            Self::Bool(b) => String::from(if *b { "1" } else { "0" }),
            Self::Int(n) => format!("{n}"),
            Self::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 {
                    format!("{f:.0}")
                } else {
                    format!("{f}")
                }
            }
            Self::Text(s) => {
                // Escape single quotes by doubling them
                let escaped = s.replace('\'', "''");
                format!("'{escaped}'")
            }
            Self::List(values) => {
                let rendered: Vec<String> = values.iter().map(Self::to_sql_inline).collect();
                format!("({})", rendered.join(", "))
            }
        }
    }

    /// Returns whether this value is a disjunction list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the parameter placeholder.
    #[must_use]
    pub const fn placeholder() -> &'static str {
        "?"
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl ToSqlValue for i32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for i16 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for i8 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u16 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u8 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

impl<T: ToSqlValue> ToSqlValue for Vec<T> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::List(self.into_iter().map(ToSqlValue::to_sql_value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_value_inline_null() {
        assert_eq!(SqlValue::Null.to_sql_inline(), "null");
    }

    #[test]
    fn test_sql_value_inline_bool_coerces_to_integer() {
        assert_eq!(SqlValue::Bool(true).to_sql_inline(), "1");
        assert_eq!(SqlValue::Bool(false).to_sql_inline(), "0");
    }

    #[test]
    fn test_sql_value_inline_int() {
        assert_eq!(SqlValue::Int(42).to_sql_inline(), "42");
        assert_eq!(SqlValue::Int(-100).to_sql_inline(), "-100");
    }

    #[test]
    fn test_sql_value_inline_float() {
        assert_eq!(SqlValue::Float(2.5).to_sql_inline(), "2.5");
        assert_eq!(SqlValue::Float(-0.125).to_sql_inline(), "-0.125");
    }

    #[test]
    fn test_sql_value_inline_integral_float_uses_integer_format() {
        assert_eq!(SqlValue::Float(2.0).to_sql_inline(), "2");
        assert_eq!(SqlValue::Float(-7.0).to_sql_inline(), "-7");
    }

    #[test]
    fn test_sql_value_inline_text() {
        assert_eq!(
            SqlValue::Text(String::from("hello")).to_sql_inline(),
            "'hello'"
        );
    }

    #[test]
    fn test_sql_value_inline_text_escaping() {
        // Single quotes are escaped by doubling
        assert_eq!(
            SqlValue::Text(String::from("it's")).to_sql_inline(),
            "'it''s'"
        );
        assert_eq!(
            SqlValue::Text(String::from("O'Brien")).to_sql_inline(),
            "'O''Brien'"
        );
    }

    #[test]
    fn test_sql_value_inline_list_preserves_order() {
        let list = SqlValue::List(vec![
            SqlValue::Text(String::from("b")),
            SqlValue::Text(String::from("a")),
            SqlValue::Int(3),
        ]);
        assert_eq!(list.to_sql_inline(), "('b', 'a', 3)");
    }

    #[test]
    fn test_to_sql_value_conversions() {
        assert_eq!(true.to_sql_value(), SqlValue::Bool(true));
        assert_eq!(42_i32.to_sql_value(), SqlValue::Int(42));
        assert_eq!(2.5_f64.to_sql_value(), SqlValue::Float(2.5));
        assert_eq!(
            "hello".to_sql_value(),
            SqlValue::Text(String::from("hello"))
        );
        assert_eq!(None::<i32>.to_sql_value(), SqlValue::Null);
        assert_eq!(Some(42_i32).to_sql_value(), SqlValue::Int(42));
        assert_eq!(
            vec!["done", "overdue"].to_sql_value(),
            SqlValue::List(vec![
                SqlValue::Text(String::from("done")),
                SqlValue::Text(String::from("overdue")),
            ])
        );
    }
}
