//! Exemplar phrases per label value. Each value's reference vector is the
//! mean embedding of its exemplars.

use label_core::{ContentType, Domain, Priority, Stakeholder};

fn owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}

/// Exemplar phrases per category, in tie-break order.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    pub content_types: Vec<(ContentType, Vec<String>)>,
    pub domains: Vec<(Domain, Vec<String>)>,
    /// HIGH first, so an exact tie resolves to the more urgent value.
    pub priorities: Vec<(Priority, Vec<String>)>,
    pub stakeholders: Vec<(Stakeholder, Vec<String>)>,
}

impl ReferenceSet {
    /// Total number of exemplar phrases.
    pub fn exemplar_count(&self) -> usize {
        fn count<T>(entries: &[(T, Vec<String>)]) -> usize {
            entries.iter().map(|(_, p)| p.len()).sum()
        }
        count(&self.content_types)
            + count(&self.domains)
            + count(&self.priorities)
            + count(&self.stakeholders)
    }

    /// Construction-meeting exemplars, four per value.
    pub fn construction_defaults() -> Self {
        Self {
            content_types: vec![
                (
                    ContentType::Decision,
                    owned(&[
                        "本日の会議で以下の事項を決定しました",
                        "承認された内容は次の通りです",
                        "合意事項として確定しました",
                        "決定事項を報告します",
                    ]),
                ),
                (
                    ContentType::Issue,
                    owned(&[
                        "以下の課題が発生しています",
                        "問題点として挙げられるのは",
                        "懸念事項があります",
                        "リスクとして認識すべき点",
                    ]),
                ),
                (
                    ContentType::ActionItem,
                    owned(&[
                        "次回までに完了すべきタスク",
                        "担当者は以下を実施してください",
                        "アクションアイテムとして対応が必要",
                        "期限までに提出をお願いします",
                    ]),
                ),
                (
                    ContentType::Information,
                    owned(&[
                        "情報共有として報告します",
                        "参考情報をお知らせします",
                        "連絡事項があります",
                        "資料を共有いたします",
                    ]),
                ),
                (
                    ContentType::Discussion,
                    owned(&[
                        "本件について議論が必要です",
                        "意見交換を行いました",
                        "検討事項として協議します",
                        "討議の結果を報告します",
                    ]),
                ),
            ],
            domains: vec![
                (
                    Domain::Structure,
                    owned(&[
                        "構造計算の結果について",
                        "鉄筋コンクリート造の施工",
                        "基礎工事の進捗状況",
                        "耐震性能の確認",
                    ]),
                ),
                (
                    Domain::Equipment,
                    owned(&[
                        "設備機器の設置について",
                        "空調システムの配管工事",
                        "電気設備の配線作業",
                        "給排水設備の施工",
                    ]),
                ),
                (
                    Domain::ConstructionManagement,
                    owned(&[
                        "施工管理の観点から",
                        "工程管理について報告",
                        "現場監督からの指示",
                        "施工計画の変更",
                    ]),
                ),
                (
                    Domain::Design,
                    owned(&[
                        "設計図面の修正について",
                        "意匠設計の変更点",
                        "詳細図の確認事項",
                        "設計変更の承認",
                    ]),
                ),
                (
                    Domain::Safety,
                    owned(&[
                        "安全管理の徹底について",
                        "労災防止対策の実施",
                        "安全パトロールの結果",
                        "危険箇所の改善",
                    ]),
                ),
                (
                    Domain::Quality,
                    owned(&[
                        "品質管理の観点から",
                        "検査結果の報告",
                        "品質基準の確認",
                        "不良箇所の是正",
                    ]),
                ),
                (
                    Domain::Cost,
                    owned(&[
                        "コスト管理について",
                        "予算超過の懸念",
                        "追加費用の見積もり",
                        "コスト削減の提案",
                    ]),
                ),
                (
                    Domain::Schedule,
                    owned(&[
                        "工程表の見直し",
                        "スケジュール調整について",
                        "工期短縮の検討",
                        "マイルストーンの確認",
                    ]),
                ),
            ],
            priorities: vec![
                (
                    Priority::High,
                    owned(&[
                        "至急対応が必要です",
                        "最優先で処理してください",
                        "緊急度が高い案件",
                        "即座に対応をお願いします",
                    ]),
                ),
                (
                    Priority::Medium,
                    owned(&[
                        "通常の優先度で対応",
                        "標準的な処理でお願いします",
                        "今週中に対応予定",
                        "順次処理を進めます",
                    ]),
                ),
                (
                    Priority::Low,
                    owned(&[
                        "急ぎではありません",
                        "時間があるときに対応",
                        "参考情報として共有",
                        "後回しでも問題ありません",
                    ]),
                ),
            ],
            stakeholders: vec![
                (
                    Stakeholder::Client,
                    owned(&[
                        "発注者からの要望",
                        "施主の意向を確認",
                        "クライアントとの打ち合わせ",
                        "建築主の承認が必要",
                    ]),
                ),
                (
                    Stakeholder::Designer,
                    owned(&[
                        "設計者からの指示",
                        "設計事務所との協議",
                        "建築家の意見",
                        "設計士による確認",
                    ]),
                ),
                (
                    Stakeholder::Contractor,
                    owned(&[
                        "施工者として対応",
                        "ゼネコンの責任範囲",
                        "建設会社からの報告",
                        "元請業者の判断",
                    ]),
                ),
                (
                    Stakeholder::Supervisor,
                    owned(&[
                        "監理者の確認が必要",
                        "工事監理の観点から",
                        "現場監督の指示",
                        "監理事務所との調整",
                    ]),
                ),
                (
                    Stakeholder::Subcontractor,
                    owned(&[
                        "協力業者への依頼",
                        "専門工事業者の作業",
                        "下請け会社との調整",
                        "職人の手配について",
                    ]),
                ),
            ],
        }
    }
}
