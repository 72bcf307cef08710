//! Product review types.

use crate::ids::{ProductId, ReviewId};
use serde::{Deserialize, Serialize};

/// A shopper review for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// The product being reviewed.
    pub product_id: ProductId,
    /// Reviewer display name.
    pub author: String,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Review text.
    pub comment: String,
    /// Avatar image URL assigned to the reviewer, if any.
    pub avatar_url: Option<String>,
    /// When the review was posted, as reported by the backend.
    pub created_at: String,
}

impl Review {
    /// Clamp the rating into the 1-5 range the UI renders.
    pub fn clamped_rating(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_is_clamped() {
        let mut review = Review {
            id: ReviewId::new("r1"),
            product_id: ProductId::new("p1"),
            author: "A. Customer".to_string(),
            rating: 9,
            comment: "Great".to_string(),
            avatar_url: None,
            created_at: "2024-01-01".to_string(),
        };
        assert_eq!(review.clamped_rating(), 5);

        review.rating = 0;
        assert_eq!(review.clamped_rating(), 1);
    }
}
