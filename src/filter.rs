use regex::Regex;

use crate::cli::Cli;
use crate::error::AppError;
use crate::models::Application;

/// Criteria for narrowing the application list before rendering.
/// An application is retained when it satisfies every provided criterion.
#[derive(Debug)]
pub struct Filter {
    query: Option<String>,
    pattern: Option<Regex>,
    health: Option<String>,
}

impl Filter {
    /// Build a Filter from CLI arguments
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let pattern = match &cli.pattern {
            Some(pat) => Some(Regex::new(pat)?),
            None => None,
        };

        Ok(Filter {
            query: cli.filter.as_ref().map(|q| q.to_lowercase()),
            pattern,
            health: cli.health.clone(),
        })
    }

    /// Apply the filter to a list of applications
    pub fn apply(&self, apps: Vec<Application>) -> Vec<Application> {
        apps.into_iter().filter(|app| self.matches(app)).collect()
    }

    fn matches(&self, app: &Application) -> bool {
        if let Some(health) = &self.health {
            if !app.health().eq_ignore_ascii_case(health) {
                return false;
            }
        }

        if self.query.is_none() && self.pattern.is_none() {
            return true;
        }

        let refs = app.image_refs();

        if let Some(re) = &self.pattern {
            if !refs.iter().any(|img| re.is_match(&img.full)) {
                return false;
            }
        }

        if let Some(query) = &self.query {
            let name_hit = app.name().to_lowercase().contains(query);
            let image_hit = refs.iter().any(|img| {
                img.name.to_lowercase().contains(query)
                    || img.version.to_lowercase().contains(query)
            });
            if !name_hit && !image_hit {
                return false;
            }
        }

        true
    }
}
