use cosmrs::proto::cosmos::bank::v1beta1 as proto;
use cosmrs::proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use error_stack::{report, Result};

use crate::args::{parse_decimal, Arg, Args};
use crate::error::Error;
use crate::msgs::Msg;
use crate::registry::MessageKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Coin {
            denom: denom.into(),
            amount,
        }
    }

    fn to_arg(&self) -> Arg {
        Arg::Struct(vec![
            ("denom".to_string(), self.denom.clone().into()),
            ("amount".to_string(), self.amount.into()),
        ])
    }
}

impl From<&Coin> for ProtoCoin {
    fn from(coin: &Coin) -> Self {
        ProtoCoin {
            denom: coin.denom.clone(),
            amount: coin.amount.to_string(),
        }
    }
}

/// Bank transfer. Its arguments are `from`, `to`, `amount` and `denom`; the EIP712 value uses
/// the amino field names `from_address`, `to_address` and a list of coins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgSend {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Coin>,
}

impl MsgSend {
    pub fn new(
        from_address: impl Into<String>,
        to_address: impl Into<String>,
        amount: u128,
        denom: impl Into<String>,
    ) -> Self {
        MsgSend {
            from_address: from_address.into(),
            to_address: to_address.into(),
            amount: vec![Coin::new(amount, denom)],
        }
    }
}

impl Msg for MsgSend {
    const KIND: MessageKind = MessageKind::MsgSend;

    type Proto = proto::MsgSend;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        let from_address = args.string("from")?;
        let to_address = args.string("to")?;
        let amount = args.uint128("amount")?;
        let denom = args.string("denom")?;

        Ok(MsgSend::new(from_address, to_address, amount, denom))
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgSend {
            from_address: self.from_address.clone(),
            to_address: self.to_address.clone(),
            amount: self.amount.iter().map(ProtoCoin::from).collect(),
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        let amount = proto
            .amount
            .into_iter()
            .enumerate()
            .map(|(i, coin)| {
                parse_decimal(&coin.amount)
                    .map(|amount| Coin::new(amount, coin.denom))
                    .ok_or_else(|| {
                        report!(Error::invalid_arg(Self::KIND, format!("amount[{}].amount", i)))
                            .attach_printable(format!("{{ value = {} }}", coin.amount))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MsgSend {
            from_address: proto.from_address,
            to_address: proto.to_address,
            amount,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("from_address", self.from_address.clone().into()),
            ("to_address", self.to_address.clone().into()),
            (
                "amount",
                Arg::List(self.amount.iter().map(Coin::to_arg).collect()),
            ),
        ]
    }

    fn from_eip712_fields(fields: &mut Args) -> Result<Self, Error> {
        let from_address = fields.string("from_address")?;
        let to_address = fields.string("to_address")?;
        let amount = fields
            .structs("amount")?
            .into_iter()
            .map(|mut coin| -> Result<Coin, Error> {
                let parsed = Coin {
                    denom: coin.string("denom")?,
                    amount: coin.uint128("amount")?,
                };
                coin.finish()?;

                Ok(parsed)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MsgSend {
            from_address,
            to_address,
            amount,
        })
    }
}
