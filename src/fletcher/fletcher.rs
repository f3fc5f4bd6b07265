use crate::fletcher::{FletcherDigest, FletcherWidth};

/// Incremental Fletcher checksum.
///
/// Words are assembled least-significant byte first. Bytes that do not yet
/// complete a word are held back; [`FletcherDigest::digest`] zero-pads them
/// into a final word without disturbing the running state, so chunked and
/// one-shot input produce the same checksum.
#[derive(Clone, Debug)]
pub struct Fletcher {
    width: FletcherWidth,
    sum1: u64,
    sum2: u64,
    pending: [u8; 4],
    pending_len: usize,
}

impl Fletcher {
    pub fn new(width: FletcherWidth) -> Self {
        Self {
            width,
            sum1: 0,
            sum2: 0,
            pending: [0; 4],
            pending_len: 0,
        }
    }

    /// One-shot checksum of `data`.
    pub fn checksum(width: FletcherWidth, data: &[u8]) -> u64 {
        let mut fletcher = Self::new(width);
        fletcher.update(data);
        fletcher.digest()
    }

    pub fn width(&self) -> FletcherWidth {
        self.width
    }

    pub fn reset(&mut self) {
        self.sum1 = 0;
        self.sum2 = 0;
        self.pending = [0; 4];
        self.pending_len = 0;
    }

    const fn add_word(sum1: u64, sum2: u64, word: u64, modulus: u64) -> (u64, u64) {
        let sum1 = (sum1 + word) % modulus;
        let sum2 = (sum2 + sum1) % modulus;
        (sum1, sum2)
    }

    fn assemble(bytes: &[u8]) -> u64 {
        bytes
            .iter()
            .rev()
            .fold(0, |word, &b| (word << 8) | u64::from(b))
    }

    fn push_word(&mut self, bytes: &[u8]) {
        (self.sum1, self.sum2) = Self::add_word(
            self.sum1,
            self.sum2,
            Self::assemble(bytes),
            self.width.modulus(),
        );
    }
}

impl FletcherDigest for Fletcher {
    fn update(&mut self, mut data: &[u8]) {
        let word_bytes = self.width.word_bytes();

        if self.pending_len > 0 {
            let take = (word_bytes - self.pending_len).min(data.len());
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&data[..take]);
            self.pending_len += take;
            data = &data[take..];

            if self.pending_len < word_bytes {
                return;
            }
            let word = self.pending;
            self.push_word(&word[..word_bytes]);
            self.pending_len = 0;
        }

        let mut chunks = data.chunks_exact(word_bytes);
        for chunk in chunks.by_ref() {
            self.push_word(chunk);
        }

        let remainder = chunks.remainder();
        self.pending[..remainder.len()].copy_from_slice(remainder);
        self.pending_len = remainder.len();
    }

    fn digest(&self) -> u64 {
        let (mut sum1, mut sum2) = (self.sum1, self.sum2);

        if self.pending_len > 0 {
            let mut word = [0u8; 4];
            word[..self.pending_len].copy_from_slice(&self.pending[..self.pending_len]);
            (sum1, sum2) = Self::add_word(
                sum1,
                sum2,
                Self::assemble(&word[..self.width.word_bytes()]),
                self.width.modulus(),
            );
        }

        (sum2 << self.width.word_bits()) | sum1
    }
}
