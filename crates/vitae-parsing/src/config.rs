use regex::Regex;

use vitae_core::SectionKind;

use crate::section::{CompiledSpec, SectionSpec, default_specs};

/// Configuration for the section segmenter.
///
/// All fields are optional; `None` means "use the built-in default".
/// Use [`SegmenterConfigBuilder`] to construct from string patterns.
#[derive(Debug, Clone, Default)]
pub struct SegmenterConfig {
    /// Compiled section table. `None` means the built-in three-section table.
    pub(crate) specs: Option<Vec<CompiledSpec>>,
    /// Regex that marks the start of the next section. `None` means the
    /// built-in capitalized-line heuristic.
    pub(crate) boundary_re: Option<Regex>,
}

/// Builder for [`SegmenterConfig`].
///
/// Accepts header spellings and string patterns that are compiled to
/// `Regex` in [`build()`](Self::build). Fails fast with `regex::Error` if
/// any pattern is invalid.
#[derive(Debug, Clone, Default)]
pub struct SegmenterConfigBuilder {
    sections: Option<Vec<SectionSpec>>,
    extra_headers: Vec<(SectionKind, String)>,
    boundary_re: Option<String>,
}

impl SegmenterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completely replace the section table.
    pub fn sections(mut self, specs: Vec<SectionSpec>) -> Self {
        self.sections = Some(specs);
        self
    }

    /// Accept an additional header spelling for one section, on top of the
    /// table's existing spellings.
    pub fn add_header(mut self, kind: SectionKind, spelling: impl Into<String>) -> Self {
        self.extra_headers.push((kind, spelling.into()));
        self
    }

    /// Override the next-section boundary pattern.
    pub fn boundary_regex(mut self, pattern: &str) -> Self {
        self.boundary_re = Some(pattern.to_string());
        self
    }

    /// Compile all patterns and produce a [`SegmenterConfig`].
    pub fn build(self) -> Result<SegmenterConfig, regex::Error> {
        let mut sections = self.sections;

        if !self.extra_headers.is_empty() {
            let mut table = sections.unwrap_or_else(default_specs);
            for (kind, spelling) in self.extra_headers {
                match table.iter_mut().find(|spec| spec.kind() == kind) {
                    Some(spec) => spec.add_header(spelling),
                    None => table.push(SectionSpec::new(kind, [spelling])),
                }
            }
            sections = Some(table);
        }

        let specs = sections
            .map(|table| {
                table
                    .iter()
                    .map(|spec| spec.compile())
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let boundary_re = self
            .boundary_re
            .map(|pattern| Regex::new(&pattern))
            .transpose()?;

        Ok(SegmenterConfig { specs, boundary_re })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_builtins() {
        let config = SegmenterConfig::default();
        assert!(config.specs.is_none());
        assert!(config.boundary_re.is_none());
    }

    #[test]
    fn test_builder_compiles_boundary() {
        let config = SegmenterConfigBuilder::new()
            .boundary_regex(r"\n---")
            .build()
            .unwrap();
        assert!(config.boundary_re.is_some());
    }

    #[test]
    fn test_builder_invalid_regex() {
        let result = SegmenterConfigBuilder::new()
            .boundary_regex(r"[invalid")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_add_header_extends_builtin_table() {
        let config = SegmenterConfigBuilder::new()
            .add_header(SectionKind::Projects, "Side Projects")
            .build()
            .unwrap();
        let specs = config.specs.expect("table materialized");
        // All built-in rows survive the extension
        assert_eq!(specs.len(), SectionKind::ALL.len());
    }

    #[test]
    fn test_add_header_for_kind_missing_from_replaced_table() {
        let config = SegmenterConfigBuilder::new()
            .sections(vec![SectionSpec::new(SectionKind::Skills, ["Skills"])])
            .add_header(SectionKind::Experience, "Employment")
            .build()
            .unwrap();
        let specs = config.specs.expect("table materialized");
        assert_eq!(specs.len(), 2);
    }
}
