// crate modules
use crate::error::{Error, Result};
use crate::{ModeField, PointSet};

// podtools modules
use podtools_utils::f;

// internal modules
use crate::vtk::ModesToVtkBuilder;

// external crates
use vtkio::model::{
    Attribute, Attributes, ByteOrder, CellType, Cells, DataArray, DataSet, ElementType, IOBuffer,
    UnstructuredGridPiece, Version, VertexNumbers, Vtk,
};

/// Convert POD mode fields to vtk point clouds for plotting
///
/// Each mode is written as an unstructured grid with one `Vertex` cell per
/// point and a single point data array holding the field.
///
/// Three component fields are written as VTK vectors, so they can be used
/// directly for glyphs and stream tracers. Fields with any other number of
/// components are written as multi-component scalars.
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented.
///
/// ```rust
/// # use podtools_modes::vtk::ModesToVtk;
/// # use podtools_modes::{ModeMatrix, PointSet};
/// let points = PointSet::new(vec![0.0, 1.0], vec![0.0, 0.0], vec![0.0, 0.0]).unwrap();
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let modes = ModeMatrix::from_values(values, 1, 2, 3).unwrap();
///
/// let vtk = ModesToVtk::new()
///     .convert(&points, &modes.field(0).unwrap())
///     .unwrap();
///
/// assert_eq!(vtk.title, "POD mode 0");
/// ```
///
/// # Vtk formatting
///
/// The byte ordering matters for binary file compatability with plotting
/// software. ParaView does not care, but VisIt only likes big endian. This is
/// the default for convenience.
///
/// ```rust
/// # use podtools_modes::vtk::ModesToVtk;
/// # use vtkio::model::ByteOrder;
/// let converter = ModesToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModesToVtk {
    /// Name of the point data array
    pub field_name: String,
    /// Title prefix, the mode index is appended
    pub title: String,
    /// Byte ordering as big or little endian
    pub byte_order: ByteOrder,
}

// Public API
impl ModesToVtk {
    /// Start with the default configuration
    pub fn new() -> ModesToVtk {
        Default::default()
    }

    /// Get an instance of the [ModesToVtkBuilder]
    pub fn builder() -> ModesToVtkBuilder {
        ModesToVtkBuilder::default()
    }

    /// Convert a single [ModeField] over a [PointSet] into a Vtk object
    ///
    /// Values are copied exactly. Component `j` of point `k` in the output is
    /// component block `j`, entry `k`, of the mode row.
    ///
    /// Fails if the field was not defined over the same number of points.
    pub fn convert(&self, points: &PointSet, field: &ModeField) -> Result<Vtk> {
        if points.len() != field.n_points() {
            return Err(Error::PointCountMismatch {
                points: points.len(),
                field: field.n_points(),
            });
        }

        Ok(Vtk {
            version: Version::Auto,
            title: f!("{} {}", self.title, field.index()),
            byte_order: self.byte_order,
            file_path: None,
            data: DataSet::inline(UnstructuredGridPiece {
                points: IOBuffer::F64(points.interleaved()),
                cells: Self::vertex_cells(points.len()),
                data: Attributes {
                    point: vec![self.point_data(field)],
                    cell: Vec::new(),
                },
            }),
        })
    }
}

impl Default for ModesToVtk {
    fn default() -> Self {
        ModesToVtkBuilder::default().build()
    }
}

impl ModesToVtk {
    /// One vertex cell per point, in point order
    fn vertex_cells(n_points: usize) -> Cells {
        let n = n_points as u64;
        Cells {
            cell_verts: VertexNumbers::XML {
                connectivity: (0..n).collect(),
                offsets: (1..=n).collect(),
            },
            types: vec![CellType::Vertex; n_points],
        }
    }

    /// Interleave the field blocks into per-point tuples
    fn point_data(&self, field: &ModeField) -> Attribute {
        Attribute::DataArray(DataArray {
            name: self.field_name.clone(),
            elem: Self::element_type(field.n_components()),
            data: IOBuffer::F64(field.interleaved()),
        })
    }

    /// Vectors for 3 components, scalars for everything else
    fn element_type(n_components: usize) -> ElementType {
        match n_components {
            3 => ElementType::Vectors,
            1..=4 => ElementType::Scalars {
                num_comp: n_components as u32,
                lookup_table: None,
            },
            n => ElementType::Generic(n as u32),
        }
    }
}
