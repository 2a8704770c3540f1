use derive_more::Display;
use spm_proto::prelude::*;

///
/// ModelType
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(crate = "spm_proto::__reexports::serde", rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ModelType {
    /// Unigram language model with dynamic algorithm.
    #[default]
    #[display("UNIGRAM")]
    Unigram = 1,

    /// Byte pair encoding.
    #[display("BPE")]
    Bpe = 2,

    /// Delimited by whitespace.
    #[display("WORD")]
    Word = 3,

    /// Tokenizes into a character sequence.
    #[display("CHAR")]
    Char = 4,
}

impl ModelType {
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ModelType {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Unigram),
            2 => Ok(Self::Bpe),
            3 => Ok(Self::Word),
            4 => Ok(Self::Char),
            _ => Err(Error::unknown_enum_value("ModelType", value)),
        }
    }
}

///
/// TrainerSpec
///
/// Parameters used to train a model.
///

#[message(fields(
    repeated(ident = "input", ty = "String"),
    string(ident = "input_format"),
    string(ident = "model_prefix"),
    scalar(ident = "model_type", ty = "ModelType", default = ModelType::Unigram),
    scalar(ident = "vocab_size", ty = "i32", default = 8000),
    repeated(ident = "accept_language", ty = "String"),
    scalar(ident = "self_test_sample_size", ty = "i32", default = 0),
    // training parameters
    scalar(ident = "character_coverage", ty = "f32", default = 0.9995),
    scalar(ident = "input_sentence_size", ty = "i32", default = 10_000_000),
    scalar(ident = "mining_sentence_size", ty = "i32", default = 2_000_000),
    scalar(ident = "training_sentence_size", ty = "i32", default = 10_000_000),
    scalar(ident = "seed_sentencepiece_size", ty = "i32", default = 1_000_000),
    scalar(ident = "shrinking_factor", ty = "f32", default = 0.75),
    scalar(ident = "max_sentence_length", ty = "i32", default = 2048),
    scalar(ident = "num_threads", ty = "i32", default = 16),
    scalar(ident = "num_sub_iterations", ty = "i32", default = 2),
    // piece shape
    scalar(ident = "max_sentencepiece_length", ty = "i32", default = 16),
    scalar(ident = "split_by_unicode_script", ty = "bool", default = true),
    scalar(ident = "split_by_number", ty = "bool", default = true),
    scalar(ident = "split_by_whitespace", ty = "bool", default = true),
    // vocabulary management
    repeated(ident = "control_symbols", ty = "String"),
    repeated(ident = "user_defined_symbols", ty = "String"),
    scalar(ident = "hard_vocab_limit", ty = "bool", default = true),
    scalar(ident = "use_all_vocab", ty = "bool", default = true),
    // reserved ids; -1 disables the symbol
    scalar(ident = "unk_id", ty = "i32", default = 0),
    scalar(ident = "bos_id", ty = "i32", default = 1),
    scalar(ident = "eos_id", ty = "i32", default = 2),
    scalar(ident = "pad_id", ty = "i32", default = -1),
    string(ident = "unk_surface", default = " \u{2047} "),
))]
pub struct TrainerSpec;

///
/// NormalizerSpec
///
/// Text normalization settings.
///

#[message(fields(
    string(ident = "name"),
    string(ident = "precompiled_charsmap"),
    scalar(ident = "add_dummy_prefix", ty = "bool", default = true),
    scalar(ident = "remove_extra_whitespaces", ty = "bool", default = true),
    scalar(ident = "escape_whitespaces", ty = "bool", default = true),
    string(ident = "normalization_rule_tsv"),
))]
pub struct NormalizerSpec;

///
/// SelfTestData
///
/// Sample inputs with their expected segmentation, used to verify a model.
///

#[message(fields(repeated(ident = "samples", ty = "self_test_data::Sample")))]
pub struct SelfTestData;

pub mod self_test_data {
    use spm_proto::prelude::*;

    #[message(
        name = "SelfTestData.Sample",
        fields(string(ident = "input"), string(ident = "expected"))
    )]
    pub struct Sample;
}

///
/// ModelProto
///
/// Self-contained model: the vocabulary plus every setting that changes
/// encoding behavior.
///

#[message(
    codec,
    fields(
        repeated(ident = "pieces", ty = "model_proto::SentencePiece"),
        member(ident = "trainer_spec", ty = "TrainerSpec"),
        member(ident = "normalizer_spec", ty = "NormalizerSpec"),
        member(ident = "self_test_data", ty = "SelfTestData"),
    )
)]
pub struct ModelProto;

pub mod model_proto {
    use super::PieceType;
    use spm_proto::prelude::*;

    ///
    /// SentencePiece
    ///
    /// One vocabulary entry. `piece` must not be empty.
    ///

    #[message(
        name = "ModelProto.SentencePiece",
        fields(
            scalar(ident = "r#type", ty = "PieceType", default = PieceType::Normal),
            string(ident = "piece"),
            scalar(ident = "score", ty = "f32", default = 0.0),
        )
    )]
    pub struct SentencePiece;
}

///
/// PieceType
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(crate = "spm_proto::__reexports::serde", rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum PieceType {
    #[default]
    #[display("NORMAL")]
    Normal = 1,

    /// Only `<unk>` for now.
    #[display("UNKNOWN")]
    Unknown = 2,

    /// `<s>`, `</s>`, `<2ja>` and similar.
    #[display("CONTROL")]
    Control = 3,

    /// Placeholders that are always kept as one piece.
    #[display("USER_DEFINED")]
    UserDefined = 4,

    #[display("UNUSED")]
    Unused = 5,
}

impl PieceType {
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for PieceType {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Normal),
            2 => Ok(Self::Unknown),
            3 => Ok(Self::Control),
            4 => Ok(Self::UserDefined),
            5 => Ok(Self::Unused),
            _ => Err(Error::unknown_enum_value("PieceType", value)),
        }
    }
}

///
/// TESTS
///
