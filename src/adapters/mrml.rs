use mrml::prelude::render::RenderOptions;

use crate::config::toml_config::RenderSettings;
use crate::domain::ports::Converter;
use crate::utils::error::{BenchError, Result};

/// MJML to HTML through `mrml`: parse, then render.
pub struct MrmlConverter {
    options: RenderOptions,
}

impl MrmlConverter {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn from_render_settings(settings: &RenderSettings) -> Self {
        let mut options = RenderOptions::default();
        if let Some(disable_comments) = settings.disable_comments {
            options.disable_comments = disable_comments;
        }
        if let Some(origin) = &settings.social_icon_origin {
            options.social_icon_origin = Some(origin.clone().into());
        }
        Self::with_options(options)
    }
}

impl Default for MrmlConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for MrmlConverter {
    fn convert(&self, template: &str) -> Result<String> {
        let parsed = mrml::parse(template).map_err(|e| BenchError::ParseError {
            message: e.to_string(),
        })?;

        if !parsed.warnings.is_empty() {
            tracing::debug!("mrml reported {} parse warnings", parsed.warnings.len());
        }

        parsed
            .element
            .render(&self.options)
            .map_err(|e| BenchError::RenderError {
                message: e.to_string(),
            })
    }

    fn name(&self) -> &str {
        "mrml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r##"<mjml>
  <mj-body>
    <mj-section>
      <mj-column>
        <mj-text>Hello World</mj-text>
        <mj-divider border-color="#F45E43" />
      </mj-column>
    </mj-section>
  </mj-body>
</mjml>"##;

    #[test]
    fn test_converts_minimal_template_to_html() {
        let html = MrmlConverter::new().convert(TEMPLATE).unwrap();
        assert!(html.contains("<html"));
        assert!(html.contains("Hello World"));
    }

    #[test]
    fn test_rejects_non_mjml_input() {
        let err = MrmlConverter::new().convert("this is not markup").unwrap_err();
        assert!(matches!(err, BenchError::ParseError { .. }));
    }

    #[test]
    fn test_settings_accept_defaults() {
        let settings = RenderSettings::default();
        let html = MrmlConverter::from_render_settings(&settings)
            .convert(TEMPLATE)
            .unwrap();
        assert!(html.contains("Hello World"));
    }

    #[test]
    fn test_converter_name() {
        assert_eq!(MrmlConverter::default().name(), "mrml");
    }
}
