// UTF-8 safety tests: chunk boundaries never split a character

use crate::common::{reconstruct, Utf8TestData};
use docsplit::CharacterTextSplitter;

#[test]
fn test_emoji_windows_count_characters() {
    let splitter = CharacterTextSplitter::new(3, 1).unwrap();

    let chunks = splitter.split("🦀🚀🎉✅❌");

    assert_eq!(chunks, vec!["🦀🚀🎉", "🎉✅❌", "❌"]);
}

#[test]
fn test_cjk_windows() {
    let splitter = CharacterTextSplitter::new(2, 0).unwrap();

    let chunks = splitter.split("中文测试");

    assert_eq!(chunks, vec!["中文", "测试"]);
}

#[test]
fn test_all_samples_reconstruct() {
    let data = Utf8TestData::new();
    let splitter = CharacterTextSplitter::new(4, 1).unwrap();

    for sample in data.emoji.iter().chain(data.multibyte.iter()) {
        let chunks = splitter.split(sample);

        assert!(chunks.iter().all(|c| c.chars().count() <= 4), "{sample}");
        assert_eq!(reconstruct(&chunks, splitter.stride()), *sample);
    }
}

#[test]
fn test_long_mixed_text() {
    let text = "Hello 👋 мир 世界 שלום! ".repeat(200);
    let splitter = CharacterTextSplitter::new(97, 31).unwrap();

    let chunks = splitter.split(&text);

    let total = text.chars().count();
    assert_eq!(chunks.len(), total.div_ceil(66));
    assert_eq!(reconstruct(&chunks, 66), text);
}
