use crate::deserialize::{Address, Bytes};
use crate::error::{Error, Result};
use crate::eth_request::CallContract;

/// 4-byte selector of AggregatorV3's `latestRoundData()`.
pub const LATEST_ROUND_DATA_SELECTOR: [u8; 4] = [0xfe, 0xaf, 0x96, 0x8c];

/// Feeds report answers with 8 decimals.
const PRICE_DIVISOR: f64 = 100_000_000.0;

/// Output layout is five 32-byte words.
const ROUND_DATA_LEN: usize = 160;

pub fn latest_round_data_call(feed: Address) -> CallContract {
    CallContract {
        to: feed,
        data: Bytes::new(&LATEST_ROUND_DATA_SELECTOR),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundData {
    pub round_id: u128,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u128,
}

impl RoundData {
    pub fn decode(output: &Bytes) -> Result<RoundData> {
        if output.len() != ROUND_DATA_LEN {
            return Err(Error::InvalidCallOutput(output.len(), ROUND_DATA_LEN));
        }

        let mut words = output.chunks_exact(32);
        let round_id = decode_uint(words.next().unwrap())?;
        let answer = decode_int(words.next().unwrap())?;
        let started_at = decode_timestamp(words.next().unwrap())?;
        let updated_at = decode_timestamp(words.next().unwrap())?;
        let answered_in_round = decode_uint(words.next().unwrap())?;

        Ok(RoundData {
            round_id,
            answer,
            started_at,
            updated_at,
            answered_in_round,
        })
    }

    pub fn price(&self) -> f64 {
        self.answer as f64 / PRICE_DIVISOR
    }
}

fn decode_uint(word: &[u8]) -> Result<u128> {
    let (hi, lo) = word.split_at(16);

    if hi.iter().any(|&b| b != 0) {
        return Err(Error::AnswerOutOfRange);
    }

    Ok(u128::from_be_bytes(lo.try_into().unwrap()))
}

fn decode_int(word: &[u8]) -> Result<i128> {
    let (hi, lo) = word.split_at(16);
    let lo = u128::from_be_bytes(lo.try_into().unwrap());

    if hi.iter().all(|&b| b == 0) {
        i128::try_from(lo).map_err(|_| Error::AnswerOutOfRange)
    } else if hi.iter().all(|&b| b == 0xff) && (lo as i128) < 0 {
        Ok(lo as i128)
    } else {
        Err(Error::AnswerOutOfRange)
    }
}

fn decode_timestamp(word: &[u8]) -> Result<u64> {
    let val = decode_uint(word)?;

    u64::try_from(val).map_err(|_| Error::AnswerOutOfRange)
}
