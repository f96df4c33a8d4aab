//! CLI error types.

use quire_config::ConfigError;
use quire_content::LoadError;
use quire_renderer::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{failed} of {total} pages failed to write")]
    Write { failed: usize, total: usize },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_error_passes_message_through() {
        let err = CliError::from(RenderError::DuplicateSlug("a".to_owned()));

        assert_eq!(err.to_string(), "Duplicate slug: a");
    }

    #[test]
    fn test_write_error_message() {
        let err = CliError::Write {
            failed: 1,
            total: 3,
        };

        assert_eq!(err.to_string(), "1 of 3 pages failed to write");
    }
}
