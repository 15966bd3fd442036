use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// 单选题
    #[serde(rename = "单选题")]
    Single,
    /// 多选题
    #[serde(rename = "多选题")]
    Multiple,
}

/// 题头 `【…】` 中的题型标记
static TYPE_MARKERS: phf::Map<&'static str, QuestionType> = phf::phf_map! {
    "单选题" => QuestionType::Single,
    "多选题" => QuestionType::Multiple,
};

impl QuestionType {
    /// 获取题头中使用的标记文本
    pub fn marker(self) -> &'static str {
        match self {
            QuestionType::Single => "单选题",
            QuestionType::Multiple => "多选题",
        }
    }

    /// 从题头标记解析题型（精确匹配）
    pub fn from_marker(marker: &str) -> Option<Self> {
        TYPE_MARKERS.get(marker).copied()
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// 选项集合：字母 → 选项内容，保持源文本中的出现顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionOptions(Vec<(char, String)>);

impl QuestionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入选项，字母已存在时保留先出现的内容并返回 false
    pub fn insert_first(&mut self, letter: char, text: impl Into<String>) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.0.push((letter, text.into()));
        true
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.iter().any(|(key, _)| *key == letter)
    }

    pub fn get(&self, letter: char) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == letter)
            .map(|(_, text)| text.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.0.iter().map(|(key, text)| (*key, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(char, &str); N]> for QuestionOptions {
    fn from(entries: [(char, &str); N]) -> Self {
        let mut options = Self::new();
        for (letter, text) in entries {
            options.insert_first(letter, text);
        }
        options
    }
}

impl Serialize for QuestionOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (letter, text) in &self.0 {
            let mut buf = [0u8; 4];
            map.serialize_entry(&*letter.encode_utf8(&mut buf), text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QuestionOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = QuestionOptions;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from single option letters to option text")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut options = QuestionOptions::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    let mut chars = key.chars();
                    let letter = match (chars.next(), chars.next()) {
                        (Some(letter), None) => letter,
                        _ => {
                            return Err(serde::de::Error::custom(format!(
                                "选项键必须是单个字母: {}",
                                key
                            )))
                        }
                    };
                    options.insert_first(letter, value);
                }
                Ok(options)
            }
        }

        deserializer.deserialize_map(OptionsVisitor)
    }
}

/// 正确答案
///
/// 单选题序列化为字符串，多选题序列化为字母数组。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    /// 答案中的各个字母（单选题原样返回整个字符串）
    pub fn letters(&self) -> Vec<&str> {
        match self {
            Answer::Single(letter) => vec![letter.as_str()],
            Answer::Multiple(letters) => letters.iter().map(String::as_str).collect(),
        }
    }

    /// 判断作答是否正确
    ///
    /// 单选题要求完全一致；多选题只比较字母集合，不计顺序
    pub fn is_correct(&self, selected: &[&str]) -> bool {
        match self {
            Answer::Single(letter) => selected.len() == 1 && selected[0] == letter.as_str(),
            Answer::Multiple(letters) => {
                let mut expected: Vec<&str> = letters.iter().map(String::as_str).collect();
                let mut given: Vec<&str> = selected.to_vec();
                expected.sort_unstable();
                expected.dedup();
                given.sort_unstable();
                given.dedup();
                expected == given
            }
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Single(letter) => f.write_str(letter),
            Answer::Multiple(letters) => f.write_str(&letters.join(",")),
        }
    }
}

/// 一道解析完成的题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    pub options: QuestionOptions,
    pub answer: Answer,
    #[serde(default)]
    pub explanation: String,
}
