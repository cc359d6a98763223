use super::schema::Catalog;

/// Validate the sport catalogue at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if catalog.sports.is_empty() {
        errors.push("sports: catalogue must contain at least one sport".to_string());
    }

    for (i, sport) in catalog.sports.iter().enumerate() {
        if sport.name.trim().is_empty() {
            errors.push(format!("sports[{}].name: must not be empty", i));
        }
        if catalog.sports[..i].iter().any(|s| s.name == sport.name) {
            errors.push(format!(
                "sports[{}].name: duplicate sport '{}'",
                i, sport.name
            ));
        }
        if sport.criteria.is_empty() {
            errors.push(format!(
                "sports[{}].criteria: must contain at least one criterion",
                i
            ));
        }
        for (j, criterion) in sport.criteria.iter().enumerate() {
            if !(criterion.weight > 0.0) || !criterion.weight.is_finite() {
                errors.push(format!(
                    "sports[{}].criteria[{}].weight: must be positive, got {}",
                    i, j, criterion.weight
                ));
            }
            if !criterion.min.is_finite() || !criterion.optimal.is_finite() {
                errors.push(format!(
                    "sports[{}].criteria[{}]: min and optimal must be finite",
                    i, j
                ));
            } else if criterion.optimal < criterion.min {
                errors.push(format!(
                    "sports[{}].criteria[{}]: optimal {} is below min {}",
                    i, j, criterion.optimal, criterion.min
                ));
            }
            if sport.criteria[..j]
                .iter()
                .any(|c| c.metric == criterion.metric)
            {
                errors.push(format!(
                    "sports[{}].criteria[{}].metric: duplicate metric '{}'",
                    i, j, criterion.metric
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Criterion, SportProfile};
    use crate::metrics::Metric;

    fn single_sport(criteria: Vec<Criterion>) -> Catalog {
        Catalog {
            sports: vec![SportProfile {
                name: "Rowing".to_string(),
                icon: "boat".to_string(),
                criteria,
            }],
        }
    }

    #[test]
    fn test_default_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::default()).is_ok());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = validate_catalog(&Catalog { sports: vec![] });
        assert!(result.is_err());
        assert!(result.unwrap_err()[0].contains("at least one sport"));
    }

    #[test]
    fn test_zero_weight_rejected() {
        let catalog = single_sport(vec![Criterion {
            metric: Metric::Vo2max,
            weight: 0.0,
            min: 50.0,
            optimal: 65.0,
        }]);
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("weight: must be positive"));
    }

    #[test]
    fn test_optimal_below_min_rejected() {
        let catalog = single_sport(vec![Criterion {
            metric: Metric::Vo2max,
            weight: 5.0,
            min: 65.0,
            optimal: 50.0,
        }]);
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("below min"));
    }

    #[test]
    fn test_duplicate_sport_name_rejected() {
        let mut catalog = Catalog::default();
        let dup = catalog.sports[0].clone();
        catalog.sports.push(dup);
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("duplicate sport"));
    }

    #[test]
    fn test_duplicate_metric_rejected() {
        let criterion = Criterion {
            metric: Metric::GripIndex,
            weight: 3.0,
            min: 40.0,
            optimal: 60.0,
        };
        let catalog = single_sport(vec![criterion, criterion]);
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("duplicate metric 'grip_index'"));
    }

    #[test]
    fn test_collects_all_errors() {
        let catalog = single_sport(vec![Criterion {
            metric: Metric::Bmi,
            weight: -1.0, // error 1
            min: 30.0,
            optimal: 20.0, // error 2
        }]);
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
