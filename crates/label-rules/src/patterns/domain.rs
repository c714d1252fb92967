use label_core::Domain;

use super::owned;

/// Domain patterns, in vocabulary declaration order.
pub fn default_sources() -> Vec<(Domain, Vec<String>)> {
    vec![
        (
            Domain::Structure,
            owned(&[
                r"(?:鉄筋|RC|S造|構造)",
                r"(?:基礎|躯体|梁|柱|スラブ)",
                r"(?:耐震|制震|免震)",
                r"構造(?:計算|設計|図)",
            ]),
        ),
        (
            Domain::Equipment,
            owned(&[
                r"(?:設備|電気|空調|衛生)",
                r"(?:配管|配線|ダクト)",
                r"(?:給排水|換気|照明)",
                r"設備(?:図|機器)",
            ]),
        ),
        (
            Domain::ConstructionManagement,
            owned(&[
                r"(?:施工|工事|現場)",
                r"(?:工程|進捗|管理)",
                r"(?:施工図|計画書)",
                r"現場(?:監督|管理)",
            ]),
        ),
        (
            Domain::Design,
            owned(&[
                r"(?:設計|図面|詳細図)",
                r"(?:意匠|デザイン)",
                r"(?:仕様|仕上げ)",
                r"設計(?:変更|図書)",
            ]),
        ),
        (
            Domain::Safety,
            owned(&[
                r"(?:安全|労災|事故)",
                r"(?:危険|ヒヤリハット)",
                r"(?:安全対策|防護)",
                r"安全(?:管理|教育|パトロール)",
            ]),
        ),
        (
            Domain::Quality,
            owned(&[
                r"(?:品質|検査|試験)",
                r"(?:不良|手直し|是正)",
                r"(?:品質管理|QC)",
                r"検査(?:結果|報告)",
            ]),
        ),
        (
            Domain::Cost,
            owned(&[
                r"(?:コスト|費用|予算)",
                r"(?:見積|金額|単価)",
                r"(?:追加工事|変更)",
                r"予算(?:管理|超過)",
            ]),
        ),
        (
            Domain::Schedule,
            owned(&[
                r"(?:工程|スケジュール|日程)",
                r"(?:遅延|前倒し|調整)",
                r"(?:マイルストーン|期限)",
                r"工程(?:表|管理|会議)",
            ]),
        ),
    ]
}
