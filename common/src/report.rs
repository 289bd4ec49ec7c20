//! 未登録商品の報告

use crate::api::BoycottApi;
use crate::error::{ClientError, Result};
use crate::messages;
use crate::types::AddProductRequest;

/// 商品を報告し、サーバーのメッセージを返す
///
/// 空白だけの `category` は送らない。
pub async fn report<A: BoycottApi>(
    api: &A,
    name: &str,
    is_boycotted: bool,
    category: Option<&str>,
) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ClientError::Rejected(messages::NAME_REQUIRED.to_string()));
    }

    let request = AddProductRequest {
        name: name.to_string(),
        is_boycotted,
        category: category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
    };
    let response = api.add_product(&request).await?;

    match response.error.filter(|e| !e.is_empty()) {
        Some(error) => Err(ClientError::Rejected(error)),
        None => Ok(response.message.unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, ScriptedApi};
    use crate::types::AddProductResponse;
    use futures::executor::block_on;

    #[test]
    fn test_report_success() {
        let api = ScriptedApi::new().on_report(Ok(AddProductResponse {
            message: Some("Product added successfully".to_string()),
            error: None,
        }));

        let message = block_on(report(&api, "  Nescafe ", true, None)).unwrap();

        assert_eq!(message, "Product added successfully");
        assert_eq!(
            api.calls(),
            vec![Call::AddProduct(AddProductRequest {
                name: "Nescafe".to_string(),
                is_boycotted: true,
                category: None,
            })]
        );
    }

    #[test]
    fn test_report_with_category() {
        let api = ScriptedApi::new()
            .on_report(Ok(AddProductResponse::default()))
            .on_report(Ok(AddProductResponse::default()));

        block_on(report(&api, "Nescafe", true, Some(" coffee "))).unwrap();
        block_on(report(&api, "Nescafe", true, Some("  "))).unwrap();

        let categories: Vec<_> = api
            .calls()
            .into_iter()
            .map(|call| match call {
                Call::AddProduct(request) => request.category,
                other => panic!("unexpected call: {:?}", other),
            })
            .collect();
        assert_eq!(categories, vec![Some("coffee".to_string()), None]);
    }

    #[test]
    fn test_report_empty_name() {
        let api = ScriptedApi::new();
        let result = block_on(report(&api, "   ", false, None));
        assert_eq!(result, Err(ClientError::Rejected(messages::NAME_REQUIRED.to_string())));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_report_rejected() {
        let api = ScriptedApi::new().on_report(Ok(AddProductResponse {
            message: None,
            error: Some("Duplicate entry".to_string()),
        }));
        let result = block_on(report(&api, "Nescafe", false, None));
        assert_eq!(result, Err(ClientError::Rejected("Duplicate entry".to_string())));
    }
}
