use assetbook::domain::ports::RegisterError;
use assetbook::AssetbookError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let Some(assetbook_err) = err.downcast_ref::<AssetbookError>() else {
        return ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode);
    };

    let block = match assetbook_err {
        AssetbookError::InvalidInput { issues } => issues
            .iter()
            .fold(ErrorBlock::new("Invalid asset input"), |block, issue| {
                block.with_detail(format!("{}: {}", issue.field, issue.message))
            })
            .with_fix("Correct the values above and run the command again."),
        AssetbookError::AssetNotFound { .. }
        | AssetbookError::Register(RegisterError::NotFound { .. }) => {
            ErrorBlock::new(assetbook_err.to_string())
                .with_fix("Run `assetbook list` to see saved asset ids.")
        }
        AssetbookError::Config { .. } => ErrorBlock::new(assetbook_err.to_string())
            .with_fix("Fix the config file, or remove it to use the defaults."),
        other => ErrorBlock::new(other.to_string()),
    };

    block.render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "type": "error",
            "message": format!("{:#}", err),
        });
        if let Some(AssetbookError::InvalidInput { issues }) = err.downcast_ref::<AssetbookError>()
        {
            output["issues"] = issues
                .iter()
                .map(|i| serde_json::json!({ "field": i.field, "message": i.message }))
                .collect();
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetbook::domain::policies::ValidationIssue;

    #[test]
    fn invalid_input_lists_each_issue() {
        let err = anyhow::Error::new(AssetbookError::InvalidInput {
            issues: vec![ValidationIssue {
                field: "cost",
                message: "Purchase cost must be positive".to_string(),
            }],
        });

        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("Invalid asset input"));
        assert!(rendered.contains("cost: Purchase cost must be positive"));
    }

    #[test]
    fn not_found_suggests_list() {
        let err = anyhow::Error::new(AssetbookError::AssetNotFound {
            id: "missing".parse().unwrap(),
        });
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("asset 'missing' not found"));
        assert!(rendered.contains("assetbook list"));
    }

    #[test]
    fn plain_errors_keep_context_chain() {
        let err = anyhow::anyhow!("disk full").context("failed to write schedule.csv");
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("failed to write schedule.csv: disk full"));
    }
}
