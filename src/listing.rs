//! `--list-languages` and `--list-providers` output.
//!
//! Both run before the config file is loaded, so they need no API keys.

use std::io::{self, Write};

use crate::language::Language;
use crate::llm::ProviderRegistry;

/// Print every supported language as `code: name`, in listing order.
pub fn list_languages<W: Write>(mut output: W) -> io::Result<()> {
    writeln!(output, "Supported languages:")?;
    for lang in Language::ALL {
        writeln!(output, "  {}: {}", lang.code(), lang.display_name())?;
    }
    Ok(())
}

/// Print the registered provider names, sorted, marking the default.
pub fn list_providers<W: Write>(registry: &ProviderRegistry, mut output: W) -> io::Result<()> {
    writeln!(output, "Supported LLM providers:")?;
    for name in registry.names() {
        let marker = if name == registry.default_name() { " (default)" } else { "" };
        writeln!(output, "  {}{}", name, marker)?;
    }
    Ok(())
}
