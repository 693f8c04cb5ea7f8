use cosmrs::proto::cosmos::gov::v1beta1 as proto;
use cosmrs::proto::cosmos::gov::v1beta1::VoteOption;
use error_stack::{report, Result};

use crate::args::{Arg, Args};
use crate::error::Error;
use crate::msgs::Msg;
use crate::registry::MessageKind;

/// Governance vote. Its arguments are `proposalId`, `option` and `sender`; the EIP712 value
/// names the sender `voter`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgVote {
    pub proposal_id: u64,
    pub voter: String,
    pub option: VoteOption,
}

impl Msg for MsgVote {
    const KIND: MessageKind = MessageKind::MsgVote;

    type Proto = proto::MsgVote;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        Ok(MsgVote {
            proposal_id: args.uint64("proposalId")?,
            option: vote_option(args.int32("option")?, "option")?,
            voter: args.string("sender")?,
        })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgVote {
            proposal_id: self.proposal_id,
            voter: self.voter.clone(),
            option: self.option as i32,
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        Ok(MsgVote {
            proposal_id: proto.proposal_id,
            voter: proto.voter,
            option: vote_option(proto.option, "option")?,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("proposal_id", self.proposal_id.into()),
            ("voter", self.voter.clone().into()),
            ("option", (self.option as i32).into()),
        ]
    }

    fn from_eip712_fields(fields: &mut Args) -> Result<Self, Error> {
        Ok(MsgVote {
            proposal_id: fields.uint64("proposal_id")?,
            voter: fields.string("voter")?,
            option: vote_option(fields.int32("option")?, "option")?,
        })
    }
}

fn vote_option(value: i32, field: &str) -> Result<VoteOption, Error> {
    VoteOption::try_from(value).map_err(|_| {
        report!(Error::invalid_arg(MessageKind::MsgVote, field))
            .attach_printable(format!("{{ vote_option = {} }}", value))
    })
}
