//! Purchase request value type and timestamps
use super::utils;
use chrono::{DateTime, TimeZone, Utc};

/// An immutable purchase request. The amount is in minor units and the id is
/// a bech32-encoded uuid7 issued at construction.
#[derive(Debug, Clone, PartialEq, Eq, minicbor::Encode, minicbor::Decode)]
pub struct PurchaseRequest {
    #[n(0)]
    request_id: String,
    #[n(1)]
    amount: u64,
    #[n(2)]
    submitted_at: TimeStamp<Utc>,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct TimeStamp<T: TimeZone>(DateTime<T>);

impl PurchaseRequest {
    pub fn new(amount: u64) -> anyhow::Result<Self> {
        Ok(Self {
            request_id: utils::new_bech32_id("purchase_")?,
            amount,
            submitted_at: TimeStamp::new(),
        })
    }
    /// Construct with a caller-supplied id. Useful when ids come from an
    /// upstream system rather than being minted here.
    pub fn new_with(request_id: String, amount: u64) -> Self {
        Self {
            request_id,
            amount,
            submitted_at: TimeStamp::new(),
        }
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn amount(&self) -> u64 {
        self.amount
    }
    pub fn submitted_at(&self) -> &TimeStamp<Utc> {
        &self.submitted_at
    }
}

impl TimeStamp<Utc> {
    pub fn new() -> Self {
        Self(Utc::now())
    }
    pub fn new_with(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .unwrap()
            .into()
    }
    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for TimeStamp<Utc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeZone> From<DateTime<T>> for TimeStamp<T> {
    fn from(value: DateTime<T>) -> Self {
        TimeStamp(value)
    }
}

impl<C> minicbor::Encode<C> for TimeStamp<Utc> {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        if let Some(nsec) = self.0.timestamp_nanos_opt() {
            return e.i64(nsec)?.ok();
        }

        Err(minicbor::encode::Error::message(
            "failed to encode timestamp. timestamp_nanos_opt returned None",
        ))
    }
}

impl<'b, C> minicbor::Decode<'b, C> for TimeStamp<Utc> {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        let nsecs = d.i64()?;

        Ok(TimeStamp(DateTime::from_timestamp_nanos(nsecs)))
    }
}
