use spm_proto::prelude::*;

///
/// SentencePieceText
///
/// Result of encoding one sentence: the input text and its pieces in order.
///

#[message(
    debug = "text",
    codec,
    fields(
        repeated(ident = "pieces", ty = "sentence_piece_text::SentencePiece"),
        string(ident = "text"),
        scalar(ident = "score", ty = "f32", default = 0.0),
    )
)]
pub struct SentencePieceText;

pub mod sentence_piece_text {
    use spm_proto::prelude::*;

    ///
    /// SentencePiece
    ///
    /// One piece of an encoded sentence. `begin` and `end` are byte offsets
    /// of `surface` in the original text.
    ///

    #[message(
        name = "SentencePieceText.SentencePiece",
        debug = "piece",
        fields(
            string(ident = "piece"),
            scalar(ident = "id", ty = "u32", default = 0),
            string(ident = "surface"),
            scalar(ident = "begin", ty = "u32", default = 0),
            scalar(ident = "end", ty = "u32", default = 0),
        )
    )]
    pub struct SentencePiece;
}

///
/// NBestSentencePieceText
///

#[message(fields(repeated(ident = "nbests", ty = "SentencePieceText")))]
pub struct NBestSentencePieceText;
