// ABOUTME: Presentation model for portfolio entries
// ABOUTME: Converts stored custom portfolios into display projects and merges them with built-ins

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER_IMAGE;
use crate::types::{CustomPortfolio, PortfolioCategory, PortfolioStyle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectImage {
    pub url: String,
    pub alt: String,
}

/// A showcase project as rendered on the portfolio pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: PortfolioCategory,
    pub style: PortfolioStyle,
    pub images: Vec<ProjectImage>,
    pub materials: Vec<String>,
    pub challenges: String,
    pub impact: String,
    pub year: i32,
    pub location: String,
    pub area: String,
}

impl From<&CustomPortfolio> for Project {
    fn from(portfolio: &CustomPortfolio) -> Self {
        let image_url = portfolio
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE);

        let materials = portfolio
            .materials
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from)
            .collect();

        let year = portfolio
            .year
            .trim()
            .parse()
            .unwrap_or_else(|_| Utc::now().year());

        Self {
            id: portfolio.id.clone(),
            slug: portfolio.slug.clone(),
            title: portfolio.title.clone(),
            description: portfolio.description.clone(),
            category: portfolio.category,
            style: portfolio.style,
            images: vec![ProjectImage {
                url: image_url.to_string(),
                alt: portfolio.title.clone(),
            }],
            materials,
            challenges: portfolio.challenges.clone(),
            impact: portfolio.impact.clone(),
            year,
            location: portfolio.location.clone(),
            area: portfolio.area_size.clone().unwrap_or_default(),
        }
    }
}

/// Custom entries first, then the built-in catalogue
pub fn merge_portfolios(custom: &[CustomPortfolio], built_in: &[Project]) -> Vec<Project> {
    custom
        .iter()
        .map(Project::from)
        .chain(built_in.iter().cloned())
        .collect()
}

pub fn find_by_slug<'a>(projects: &'a [Project], slug: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn custom(id: &str, slug: &str) -> CustomPortfolio {
        CustomPortfolio {
            id: id.to_string(),
            slug: slug.to_string(),
            title: "Sea View Villa".to_string(),
            description: "Coastal residence".to_string(),
            category: PortfolioCategory::Residential,
            style: PortfolioStyle::Minimalist,
            location: "Goa".to_string(),
            area_size: None,
            year: "2023".to_string(),
            image_url: None,
            materials: "teak, linen , ,brass".to_string(),
            challenges: String::new(),
            impact: String::new(),
            created_at: None,
        }
    }

    #[test]
    fn test_project_from_custom_portfolio() {
        let project = Project::from(&custom("custom-1", "sea-view-villa-1"));

        assert_eq!(project.materials, vec!["teak", "linen", "brass"]);
        assert_eq!(project.year, 2023);
        assert_eq!(project.images.len(), 1);
        assert_eq!(project.images[0].url, PLACEHOLDER_IMAGE);
        assert_eq!(project.images[0].alt, "Sea View Villa");
        assert_eq!(project.area, "");
    }

    #[test]
    fn test_unparseable_year_falls_back_to_current_year() {
        let mut portfolio = custom("custom-1", "x");
        portfolio.year = "soon".to_string();
        assert_eq!(Project::from(&portfolio).year, Utc::now().year());
    }

    #[test]
    fn test_merge_puts_custom_first_and_find_by_slug() {
        let built_in = vec![Project::from(&custom("static-1", "static-loft"))];
        let customs = vec![custom("custom-2", "villa-2")];

        let merged = merge_portfolios(&customs, &built_in);
        let ids: Vec<&str> = merged.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["custom-2", "static-1"]);

        assert_eq!(find_by_slug(&merged, "static-loft").unwrap().id, "static-1");
        assert!(find_by_slug(&merged, "missing").is_none());
    }
}
