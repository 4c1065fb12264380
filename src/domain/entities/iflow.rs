//! # Iflow Entity
//!
//! アップロード対象のリソースマニフェスト

use serde::{Deserialize, Serialize};

/// リモートの統合アーティファクト（ID とバージョンの組）
///
/// 1つ以上のスクリプトリソースを持つ。設定ファイルから読み込まれた後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Iflow {
    pub id: String,
    pub version: String,
    #[serde(default)]
    pub scripts: Vec<Script>,
}

/// Iflow に添付される名前付きスクリプトリソース
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Script {
    pub id: String,
    /// Resource type tag sent to the API (e.g. `groovy`)
    #[serde(rename = "type")]
    pub script_type: String,
    /// Local file the payload is read from at upload time
    pub path: String,
}

impl Iflow {
    pub fn new(id: impl Into<String>, version: impl Into<String>, scripts: Vec<Script>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            scripts,
        }
    }
}

impl Script {
    pub fn new(
        id: impl Into<String>,
        script_type: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            script_type: script_type.into(),
            path: path.into(),
        }
    }
}

/// マニフェスト全体のスクリプト数を数える
pub fn count_scripts(iflows: &[Iflow]) -> usize {
    iflows.iter().map(|iflow| iflow.scripts.len()).sum()
}
