use fnv::FnvHashMap;

/// Value held by a named shader uniform.
#[derive(Clone, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Floats(Vec<f32>),
}

impl UniformValue {
    pub fn as_float(&self) -> Option<f32> {
        match self {
            UniformValue::Float(v) => Some(*v),
            UniformValue::Floats(_) => None,
        }
    }

    pub fn as_floats(&self) -> Option<&[f32]> {
        match self {
            UniformValue::Floats(v) => Some(v.as_slice()),
            UniformValue::Float(_) => None,
        }
    }
}

/// Uniform mapping of one mesh material, keyed by shader name.
///
/// Reads of names that were never written return zero/empty so that a shader
/// block can always be packed, whichever mesh owns the table.
#[derive(Clone, Debug, Default)]
pub struct UniformTable {
    values: FnvHashMap<&'static str, UniformValue>,
}

impl UniformTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_float(&mut self, name: &'static str, value: f32) {
        self.values.insert(name, UniformValue::Float(value));
    }

    /// Overwrite an array uniform, reusing its allocation when possible.
    pub fn set_floats(&mut self, name: &'static str, values: &[f32]) {
        match self.values.get_mut(name) {
            Some(UniformValue::Floats(existing)) => {
                existing.clear();
                existing.extend_from_slice(values);
            }
            _ => {
                self.values
                    .insert(name, UniformValue::Floats(values.to_vec()));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn float(&self, name: &str) -> f32 {
        self.get(name).and_then(UniformValue::as_float).unwrap_or(0.0)
    }

    pub fn floats(&self, name: &str) -> &[f32] {
        self.get(name).and_then(UniformValue::as_floats).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Pack a flat float slice into `N` vec4 slots (WGSL uniform array stride).
/// Missing entries are zero, extra entries are dropped.
pub fn pack_vec4s<const N: usize>(values: &[f32]) -> [[f32; 4]; N] {
    let mut out = [[0.0f32; 4]; N];
    for (i, v) in values.iter().take(N * 4).enumerate() {
        out[i / 4][i % 4] = *v;
    }
    out
}
