//! SentencePiece message types: tokenization results (`SentencePieceText`,
//! `NBestSentencePieceText`) and the model bundle (`ModelProto` with its
//! trainer, normalizer and self-test specs).

pub mod model;
pub mod text;


pub use model::{
    ModelProto, ModelType, NormalizerSpec, PieceType, SelfTestData, TrainerSpec, model_proto,
    self_test_data,
};
pub use text::{NBestSentencePieceText, SentencePieceText, sentence_piece_text};
