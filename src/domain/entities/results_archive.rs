//! # ResultsArchive Value Object
//!
//! 結果ディレクトリをZIP化したバリューオブジェクト

/// Archive file name used for the `results` multipart part
pub const RESULTS_ARCHIVE_NAME: &str = "allure-results.zip";

/// ZIP化された結果ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsArchive {
    bytes: Vec<u8>,
    file_count: usize,
}

impl ResultsArchive {
    /// 新しいアーカイブを作成
    ///
    /// # Arguments
    ///
    /// * `bytes` - ZIPデータ
    /// * `file_count` - 含まれるファイル数
    pub fn new(bytes: Vec<u8>, file_count: usize) -> Self {
        Self { bytes, file_count }
    }

    /// アーカイブのバイト数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 含まれるファイル数を返す
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// バイト列の所有権を移動して返す
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
