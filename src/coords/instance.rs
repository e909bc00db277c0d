use super::CHUNK_SIZE;

/// Packed description of the template chunk an instance chunk displays.
///
/// Bit layout, low to high:
///
/// ```text
///  bit 0      unused
///  bits 1-2   rotation (quarter turns)
///  bits 3-13  template chunk y
///  bits 14-23 template chunk x
///  bits 24-25 template plane
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateChunk(pub i32);

impl TemplateChunk {
    /// Packs the fields back into the client's encoding.
    pub fn pack(rotation: i32, chunk_x: i32, chunk_y: i32, plane: i32) -> Self {
        Self(
            (rotation & 0x3) << 1
                | (chunk_y & 0x7FF) << 3
                | (chunk_x & 0x3FF) << 14
                | (plane & 0x3) << 24,
        )
    }

    pub fn rotation(&self) -> i32 {
        self.0 >> 1 & 0x3
    }

    pub fn chunk_x(&self) -> i32 {
        self.0 >> 14 & 0x3FF
    }

    pub fn chunk_y(&self) -> i32 {
        self.0 >> 3 & 0x7FF
    }

    pub fn plane(&self) -> i32 {
        self.0 >> 24 & 0x3
    }

    /// World tile x of the template chunk's origin.
    pub fn origin_x(&self) -> i32 {
        self.chunk_x() * CHUNK_SIZE
    }

    /// World tile y of the template chunk's origin.
    pub fn origin_y(&self) -> i32 {
        self.chunk_y() * CHUNK_SIZE
    }

    /// Whether world tile `(x, y)` lies in the template chunk.
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let within =
            |v: i32, start: i32| (0..CHUNK_SIZE as i64).contains(&(v as i64 - start as i64));
        within(x, self.origin_x()) && within(y, self.origin_y())
    }
}

/// Template chunk table of an instanced scene, indexed
/// `[plane][chunk_x][chunk_y]`.
///
/// Owned by the caller's world state for the lifetime of the instance and
/// only read here. Missing entries behave as if outside the instance grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceTemplates {
    chunks: Vec<Vec<Vec<i32>>>,
}

impl InstanceTemplates {
    pub fn new(chunks: Vec<Vec<Vec<i32>>>) -> Self {
        Self { chunks }
    }

    pub fn get(&self, plane: i32, chunk_x: i32, chunk_y: i32) -> Option<TemplateChunk> {
        let plane = usize::try_from(plane).ok()?;
        let chunk_x = usize::try_from(chunk_x).ok()?;
        let chunk_y = usize::try_from(chunk_y).ok()?;
        self.chunks
            .get(plane)?
            .get(chunk_x)?
            .get(chunk_y)
            .map(|&code| TemplateChunk(code))
    }

    /// Every chunk on `plane` as `(chunk_x, chunk_y, template)`.
    pub fn plane_chunks(&self, plane: i32) -> impl Iterator<Item = (i32, i32, TemplateChunk)> + '_ {
        let columns = usize::try_from(plane)
            .ok()
            .and_then(|p| self.chunks.get(p))
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        columns.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, &code)| (x as i32, y as i32, TemplateChunk(code)))
        })
    }
}
