// internal modules
use crate::vtk::ModesToVtk;

// external crates
use vtkio::model::ByteOrder;

/// Builder implementation for ModesToVtk configuration
///
/// The fields of [ModesToVtk] are left public for direct use but the module
/// also implements a builder.
///
/// Any number of parameters can be set with chained setter calls (including
/// none). To get the final [ModesToVtk] from the builder, call
/// [build()](ModesToVtkBuilder::build).
///
/// ```rust
/// # use podtools_modes::vtk::ModesToVtk;
/// # use vtkio::model::ByteOrder;
/// let converter = ModesToVtk::builder()
///     .field_name("velocity_mode")
///     .title("Cylinder wake POD")
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
///
/// assert_eq!(converter.field_name, "velocity_mode");
/// ```
#[derive(Debug)]
pub struct ModesToVtkBuilder {
    /// Name of the point data array
    field_name: String,
    /// Title prefix written to every file
    title: String,
    /// Byte ordering as big or little endian
    byte_order: ByteOrder,
}

impl ModesToVtkBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [ModesToVtk] type
    pub fn build(self) -> ModesToVtk {
        ModesToVtk {
            field_name: self.field_name,
            title: self.title,
            byte_order: self.byte_order,
        }
    }

    /// Name of the point data array holding the mode field
    ///
    /// Defaults to `"mode"`. VisIt is fussy about names, so avoid whitespace
    /// and brackets.
    pub fn field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }

    /// Title written into each file, followed by the mode index
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the byte ordering
    ///
    /// Note that VisIt only reads big endian binary data, even though most
    /// systems are little endian. Defaults to big endian for convenience.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }
}

impl Default for ModesToVtkBuilder {
    fn default() -> Self {
        Self {
            field_name: "mode".to_string(),
            title: "POD mode".to_string(),
            byte_order: ByteOrder::BigEndian,
        }
    }
}
