use label_core::ContentType;

use super::owned;

/// Content type patterns, in vocabulary declaration order.
pub fn default_sources() -> Vec<(ContentType, Vec<String>)> {
    vec![
        (
            ContentType::Decision,
            owned(&[
                r"決定(?:事項|した|します)",
                r"(?:に|と)決め(?:ました|る)",
                r"確定(?:した|します)",
                r"承認(?:され|し)ました",
                r"合意(?:に達|し)ました",
            ]),
        ),
        (
            ContentType::Issue,
            owned(&[
                r"課題(?:が|は|として)",
                r"問題(?:が|は|点)",
                r"懸念(?:事項|が)",
                r"リスク(?:が|は)",
                r"未解決",
                r"検討(?:が必要|事項)",
            ]),
        ),
        (
            ContentType::ActionItem,
            owned(&[
                r"(?:まで|までに)(?:実施|完了|提出)",
                r"アクション(?:アイテム|項目)",
                r"タスク(?:として|は)",
                r"宿題(?:事項|として)",
                r"(?:を|は)(?:担当|対応)(?:する|します)",
                r"次回(?:まで|までに)",
            ]),
        ),
        (
            ContentType::Information,
            owned(&[
                r"(?:情報|資料)(?:共有|提供)",
                r"(?:お知らせ|連絡)(?:事項|です)",
                r"報告(?:事項|します)",
                r"説明(?:します|いたします)",
            ]),
        ),
        (
            ContentType::Discussion,
            owned(&[
                r"議論(?:が必要|します|の結果)",
                r"意見(?:交換|を)",
                r"検討(?:します|中)",
                r"協議(?:事項|します)",
            ]),
        ),
    ]
}

