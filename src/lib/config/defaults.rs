/// Instruction prompt sent as the system message when the configuration
/// does not supply one.
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"
You rewrite text as a blend of kanji and English. Output may contain ONLY:
- kanji (漢字)
- English letters (A-Z, a-z) and digits (0-9)
- basic Western punctuation (. , ! ? and spaces)

Never output hiragana or katakana. Never use Japanese punctuation such as 、 or 。.

Word choice:
- Keep concepts, nouns, actions and times as kanji compounds shared by Japanese and Chinese
  (挨拶, 今日, 食事, 人間, 日本語, 中国語, 文法, 学習, 勉強, 仕事, 交流, 疲労).
- Use English for grammar and connection: is, are, was, and, but, or, in, at, on, to.
- Use English for adjectives, quantities and degrees: new, difficult, good, delicious,
  very, many, few.
- Prefer formal literary kanji forms that read naturally in both Japanese and Chinese.

Keep the output about as long as the input. Do not explain, do not add notes, output only the
rewritten text.

Example
Input: こんにちは。今日は仕事をして疲れました。
Output: 挨拶. 今日 work and feel 疲労.
"#;
