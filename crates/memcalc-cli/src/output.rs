//! Output formatting

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::runner::{SessionReport, Step};
use console::style;
use memcalc::core::number::number_to_string;

/// Renders session output as text or JSON
#[derive(Debug, Clone)]
pub struct Reporter {
    config: CliConfig,
    use_color: bool,
}

impl Reporter {
    /// Create a reporter for the given configuration
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        let use_color = config.color.should_color();
        Self { config, use_color }
    }

    /// One line for a key press, or `None` when steps are not printed as text
    #[must_use]
    pub fn render_step(&self, step: &Step) -> Option<String> {
        if !self.config.steps || self.config.json {
            return None;
        }
        let key = format!("{:>4}", step.key);
        let previous = if step.previous.is_empty() {
            String::new()
        } else {
            format!("{} ", step.previous)
        };
        if self.use_color {
            Some(format!(
                "{}  {}{}",
                style(key).cyan(),
                style(previous).dim(),
                style(&step.current).bold()
            ))
        } else {
            Some(format!("{key}  {previous}{}", step.current))
        }
    }

    /// The final output
    pub fn render_report(&self, report: &SessionReport) -> CliResult<String> {
        if self.config.json {
            return Ok(serde_json::to_string_pretty(report)?);
        }
        if self.config.verbosity.is_quiet() {
            return Ok(report.current.clone());
        }

        let mut lines = Vec::with_capacity(3);
        lines.push(report.previous.clone());
        if self.use_color {
            lines.push(style(&report.current).bold().to_string());
        } else {
            lines.push(report.current.clone());
        }
        if report.memory != 0.0 {
            lines.push(format!("M = {}", number_to_string(report.memory)));
        }
        if self.config.verbosity.is_verbose() && !report.tape.is_empty() {
            lines.push(report.tape.clone());
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, Verbosity};

    fn plain() -> CliConfig {
        CliConfig::new().with_color(ColorChoice::Never)
    }

    fn report(memory: f64) -> SessionReport {
        SessionReport {
            previous: "12 +".to_string(),
            current: "3".to_string(),
            memory,
            history: Vec::new(),
            tape: "10 + 2 = 12".to_string(),
            steps: Vec::new(),
        }
    }

    fn step() -> Step {
        Step {
            key: "M+".to_string(),
            previous: String::new(),
            current: "1,234".to_string(),
            memory: 1234.0,
        }
    }

    #[test]
    fn test_render_text() {
        let out = Reporter::new(plain()).render_report(&report(0.0)).unwrap();
        assert_eq!(out, "12 +\n3");
    }

    #[test]
    fn test_render_text_with_memory() {
        let out = Reporter::new(plain()).render_report(&report(2.5)).unwrap();
        assert_eq!(out, "12 +\n3\nM = 2.5");
    }

    #[test]
    fn test_render_verbose_includes_tape() {
        let config = plain().with_verbosity(Verbosity::Verbose);
        let out = Reporter::new(config).render_report(&report(0.0)).unwrap();
        assert_eq!(out, "12 +\n3\n10 + 2 = 12");
    }

    #[test]
    fn test_render_quiet() {
        let config = plain().with_verbosity(Verbosity::Quiet);
        let out = Reporter::new(config).render_report(&report(2.5)).unwrap();
        assert_eq!(out, "3");
    }

    #[test]
    fn test_render_json() {
        let out = Reporter::new(plain().with_json(true))
            .render_report(&report(1.0))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["previous"], "12 +");
        assert_eq!(value["memory"], 1.0);
        assert!(value.get("tape").is_none());
    }

    #[test]
    fn test_render_step() {
        let reporter = Reporter::new(plain().with_steps(true));
        assert_eq!(reporter.render_step(&step()).unwrap(), "  M+  1,234");
    }

    #[test]
    fn test_render_step_disabled() {
        assert!(Reporter::new(plain()).render_step(&step()).is_none());
        let json = plain().with_steps(true).with_json(true);
        assert!(Reporter::new(json).render_step(&step()).is_none());
    }
}
