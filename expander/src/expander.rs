use std::io::{self, Write};

use crate::arity::ArityDescriptor;
use crate::config::GeneratorConfig;
use crate::error::BinderError;
use crate::skeleton::{self, SpecializationVariant};
use crate::substitution::SubstitutionTable;

/// Drives the header, per-arity specializations and footer in order.
#[derive(Debug, Clone)]
pub struct Expander {
    config: GeneratorConfig,
}

impl Expander {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn max_param(&self) -> usize {
        self.config.max_param
    }

    pub fn header(&self) -> String {
        skeleton::header(&self.config.origin)
    }

    pub fn footer(&self) -> &'static str {
        skeleton::FOOTER
    }

    pub fn descriptor(&self, n: usize) -> Result<ArityDescriptor, BinderError> {
        ArityDescriptor::new(n, self.config.max_param)
    }

    pub fn table(&self, n: usize) -> Result<SubstitutionTable, BinderError> {
        Ok(SubstitutionTable::for_arity(&self.descriptor(n)?))
    }

    /// Both specializations for `n` parameters.
    pub fn render(&self, n: usize) -> Result<String, BinderError> {
        Ok(render_arity(&self.descriptor(n)?))
    }

    /// The complete unit: header, arities `0..=max_param` ascending, footer.
    pub fn generate(&self) -> String {
        let _span = tracing::info_span!("generate", max_param = self.config.max_param).entered();

        let mut out = self.header();
        for arity in ArityDescriptor::range(self.config.max_param) {
            let block = render_arity(&arity);
            let leftover = skeleton::unexpanded_tokens(&block);
            if !leftover.is_empty() {
                tracing::warn!(arity = arity.count(), ?leftover, "unexpanded placeholders");
            }
            tracing::trace!(arity = arity.count(), bytes = block.len(), "rendered arity");
            out.push_str(&block);
        }
        out.push_str(self.footer());

        tracing::debug!(bytes = out.len(), "binder unit complete");
        out
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.generate().as_bytes())?;
        out.flush()
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Render the void and value specializations for one arity.
pub fn render_arity(arity: &ArityDescriptor) -> String {
    let table = SubstitutionTable::for_arity(arity);
    SpecializationVariant::ALL
        .into_iter()
        .map(|variant| skeleton::fill(variant.skeleton(), &table))
        .collect()
}
