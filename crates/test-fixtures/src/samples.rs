//! Meeting-transcript passages with known rule outcomes. The expected labels
//! for each one live in `golden/rules_golden.json`.

/// Decision phrase plus a date token.
pub const DECISION_WITH_DATE: &str = "基礎工事の工程は3月15日の着工で確定します。";

/// Safety issue flagged as urgent, at the site.
pub const URGENT_SAFETY_ISSUE: &str = "現場の足場に安全上の問題があり、至急是正が必要です。";

/// Action item assigned to the contractor.
pub const CONTRACTOR_ACTION_ITEM: &str =
    "施工者は来週の金曜日までに提出する施工図を作成してください。";

/// Cost discussion with an amount and a percentage.
pub const COST_DISCUSSION: &str =
    "追加工事の見積金額は1,200万円で、予算を15%超過するため発注者と協議します。";

/// Low-priority information shared by the design office.
pub const DESIGN_INFORMATION: &str = "参考までに、設計事務所から構造図の資料共有がありました。";

/// Two domains in one sentence.
pub const SAFETY_AND_QUALITY_REPORT: &str = "安全パトロールと品質検査の結果を報告します。";

/// Small talk; nothing matches.
pub const GREETING: &str = "おはようございます。";

/// Every sample, in the order used by the golden dataset.
pub const ALL: &[&str] = &[
    DECISION_WITH_DATE,
    URGENT_SAFETY_ISSUE,
    CONTRACTOR_ACTION_ITEM,
    COST_DISCUSSION,
    DESIGN_INFORMATION,
    SAFETY_AND_QUALITY_REPORT,
    GREETING,
];
