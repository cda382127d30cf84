use serde::{Deserialize, Serialize};
use std::fmt;

// Lighthouse audit categories, in the order failures are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Accessibility,
    BestPractices,
    Performance,
    ProgressiveWebApp,
    Seo,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Accessibility,
        Category::BestPractices,
        Category::Performance,
        Category::ProgressiveWebApp,
        Category::Seo,
    ];

    /// Name used in failure messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Accessibility => "Accessibility",
            Category::BestPractices => "Best Practices",
            Category::Performance => "Performance",
            Category::ProgressiveWebApp => "Progressive Web App",
            Category::Seo => "SEO",
        }
    }

    /// Name of the input carrying this category's minimum score.
    pub fn input_name(self) -> &'static str {
        match self {
            Category::Accessibility => "minAccessibilityScore",
            Category::BestPractices => "minBestPracticesScore",
            Category::Performance => "minPerformanceScore",
            Category::ProgressiveWebApp => "minProgressiveWebAppScore",
            Category::Seo => "minSeoScore",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// pub struct for the per-page category scores, any of which may be missing
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub accessibility: Option<f64>,
    pub best_practices: Option<f64>,
    pub performance: Option<f64>,
    pub progressive_web_app: Option<f64>,
    pub seo: Option<f64>,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> Option<f64> {
        match category {
            Category::Accessibility => self.accessibility,
            Category::BestPractices => self.best_practices,
            Category::Performance => self.performance,
            Category::ProgressiveWebApp => self.progressive_web_app,
            Category::Seo => self.seo,
        }
    }
}
