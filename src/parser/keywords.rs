//! Keyword rules mapping a note to an expense category.
//!
//! Plain substring matching over an ordered table: the first category with a
//! keyword contained in the lower-cased note wins. No scoring, no fuzzing.

use crate::models::{Category, TransactionType};

/// Ordered `(category, keywords)` table. Keywords must be lower-case.
pub const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "cơm", "phở", "bún", "bánh", "ăn", "cafe", "cà phê", "cafê", "trà", "nước",
            "nhà hàng", "lẩu", "food", "lunch", "dinner", "breakfast", "coffee", "tea",
            "snack", "restaurant",
        ],
    ),
    (
        Category::Transport,
        &[
            "grab", "xăng", "gửi xe", "taxi", "xe buýt", "bus", "uber", "be ", "gojek",
            "parking", "fuel", "train", "vé xe",
        ],
    ),
    (Category::Laundry, &["giặt", "laundry", "ủi"]),
    (
        Category::Beauty,
        &["cắt tóc", "làm tóc", "gội", "nail", "spa", "mỹ phẩm", "haircut", "salon"],
    ),
    (
        Category::Services,
        &["internet", "wifi", "điện", "4g", "điện thoại", "phone", "netflix", "spotify", "subscription"],
    ),
    (Category::Housing, &["tiền nhà", "thuê nhà", "rent", "nhà", "apartment"]),
    (
        Category::Shopping,
        &["mua", "quần", "áo", "giày", "shopee", "lazada", "tiki", "shopping", "shoes"],
    ),
    (
        Category::Entertainment,
        &["phim", "game", "karaoke", "du lịch", "movie", "cinema", "concert", "travel"],
    ),
];

/// Infer a category for a note.
///
/// Income lines always map to salary. For expenses, `None` means no keyword
/// matched and the caller's current selection should be kept.
pub fn infer_category(note: &str, kind: TransactionType) -> Option<Category> {
    if kind == TransactionType::Income {
        return Some(Category::default_for(TransactionType::Income));
    }

    let lowered = note.to_lowercase();
    if lowered.trim().is_empty() {
        return None;
    }

    KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(category, _)| *category)
}
