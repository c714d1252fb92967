use label_core::Stakeholder;

use super::owned;

/// Stakeholder patterns, in vocabulary declaration order.
pub fn default_sources() -> Vec<(Stakeholder, Vec<String>)> {
    vec![
        (
            Stakeholder::Client,
            owned(&[
                r"(?:発注者|施主|オーナー)",
                r"(?:クライアント|顧客)",
                r"(?:事業主|建築主)",
            ]),
        ),
        (
            Stakeholder::Designer,
            owned(&[
                r"(?:設計者|設計事務所)",
                r"(?:建築家|デザイナー)",
                r"(?:設計士|意匠設計)",
            ]),
        ),
        (
            Stakeholder::Contractor,
            owned(&[
                r"(?:施工者|ゼネコン|建設会社)",
                r"(?:元請|工事業者)",
                r"(?:施工会社|建築会社)",
            ]),
        ),
        (
            Stakeholder::Supervisor,
            owned(&[
                r"(?:監理者|工事監理)",
                r"(?:監督員|現場監督)",
                r"(?:管理者|監理事務所)",
            ]),
        ),
        (
            Stakeholder::Subcontractor,
            owned(&[
                r"(?:協力業者|下請け|専門工事)",
                r"(?:サブコン|専門業者)",
                r"(?:職人|作業員)",
            ]),
        ),
    ]
}
