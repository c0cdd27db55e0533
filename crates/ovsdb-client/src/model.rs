use ovsdb_core::{FieldValue, Result};

/// A typed record whose fields are bound to the columns of one table.
///
/// This is the compile-time stand-in for tag reflection: each model hands
/// the mapper a static list of bound column names plus value access by
/// column name. The reserved `_uuid` binding identifies the row; fields
/// the model does not bind are invisible to the mapper.
///
/// Field values cross the trait boundary as [`FieldValue`], so a model's
/// concrete field types only need a conversion each way:
///
/// ```
/// use ovsdb_client::Model;
/// use ovsdb_core::{err, Atom, FieldValue, Result};
///
/// #[derive(Clone, Default)]
/// struct Bridge {
///     uuid: String,
///     name: String,
///     ports: Vec<String>,
/// }
///
/// impl Model for Bridge {
///     fn columns(&self) -> &'static [&'static str] {
///         &["_uuid", "name", "ports"]
///     }
///
///     fn field(&self, column: &str) -> Option<FieldValue> {
///         match column {
///             "_uuid" => Some(FieldValue::from(self.uuid.clone())),
///             "name" => Some(FieldValue::from(self.name.clone())),
///             "ports" => Some(FieldValue::from(self.ports.clone())),
///             _ => None,
///         }
///     }
///
///     fn set_field(&mut self, column: &str, value: FieldValue) -> Result<()> {
///         match (column, value) {
///             ("_uuid", FieldValue::Scalar(Atom::String(v))) => self.uuid = v,
///             ("name", FieldValue::Scalar(Atom::String(v))) => self.name = v,
///             ("ports", FieldValue::Set(items)) => {
///                 self.ports = items
///                     .into_iter()
///                     .filter_map(|atom| atom.as_str().map(str::to_string))
///                     .collect();
///             }
///             (column, value) => {
///                 return Err(err!("column {column}: unexpected {}", value.type_name()))
///             }
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Model: Clone {
    /// The column names this model binds, in declaration order.
    ///
    /// Must be stable across calls; the mapper walks this list for every
    /// row translation.
    fn columns(&self) -> &'static [&'static str];

    /// The current value of the field bound to `column`, or `None` when
    /// the model does not bind it.
    ///
    /// The returned shape also tells the mapper how to decode wire values
    /// destined for this field, so an unset field must still report its
    /// shape (an empty set, an absent optional, a zero scalar).
    fn field(&self, column: &str) -> Option<FieldValue>;

    /// Stores a decoded value into the field bound to `column`.
    fn set_field(&mut self, column: &str, value: FieldValue) -> Result<()>;

    /// Returns `true` when the model binds `column`.
    fn binds(&self, column: &str) -> bool {
        self.columns().contains(&column)
    }
}
