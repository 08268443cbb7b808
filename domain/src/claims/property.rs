//! Structured-data property codes consulted by the lookup

/// A property code such as `P569`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(&'static str);

impl PropertyId {
    /// Date of birth
    pub const DATE_OF_BIRTH: PropertyId = PropertyId("P569");
    /// Date of death
    pub const DATE_OF_DEATH: PropertyId = PropertyId("P570");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
