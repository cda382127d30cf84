use crate::models::lighthouse::category::Category;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Minimum score for one category.
///
/// `Unset` and `Value(0.0)` are different things: the first never fails,
/// the second is enforced like any other minimum.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Threshold {
    #[default]
    Unset,
    Value(f64),
}

impl Threshold {
    pub fn value(self) -> Option<f64> {
        match self {
            Threshold::Unset => None,
            Threshold::Value(min) => Some(min),
        }
    }

    pub fn is_set(self) -> bool {
        matches!(self, Threshold::Value(_))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ThresholdConfig {
    pub accessibility: Threshold,
    pub best_practices: Threshold,
    pub performance: Threshold,
    pub progressive_web_app: Threshold,
    pub seo: Threshold,
    // handed to the status report writer, evaluation ignores it
    pub output_directory: Option<PathBuf>,
}

impl ThresholdConfig {
    pub fn get(&self, category: Category) -> Threshold {
        match category {
            Category::Accessibility => self.accessibility,
            Category::BestPractices => self.best_practices,
            Category::Performance => self.performance,
            Category::ProgressiveWebApp => self.progressive_web_app,
            Category::Seo => self.seo,
        }
    }

    pub fn set(&mut self, category: Category, threshold: Threshold) {
        let slot = match category {
            Category::Accessibility => &mut self.accessibility,
            Category::BestPractices => &mut self.best_practices,
            Category::Performance => &mut self.performance,
            Category::ProgressiveWebApp => &mut self.progressive_web_app,
            Category::Seo => &mut self.seo,
        };
        *slot = threshold;
    }

    pub fn any_set(&self) -> bool {
        Category::ALL.iter().any(|c| self.get(*c).is_set())
    }

    /// Configured minimums keyed by category, for reporting.
    pub fn configured(&self) -> BTreeMap<String, f64> {
        Category::ALL
            .iter()
            .filter_map(|c| self.get(*c).value().map(|min| (c.input_name().to_string(), min)))
            .collect()
    }
}
