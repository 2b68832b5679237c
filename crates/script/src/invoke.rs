//! Canned invocation scripts for common contract calls.

use num_bigint::BigInt;
use tessera_base::Hash160;

use crate::builder::ScriptBuilder;
use crate::error::ScriptError;
use crate::param::ContractParameter;

/// Compiles a contract method call: arguments, then the method name,
/// then APPCALL to the contract. Arguments land on the stack so the
/// contract's dispatcher pops the method name first and the argument
/// array second.
pub fn invocation_script(
    contract: &Hash160,
    method: &str,
    args: &[ContractParameter],
) -> Result<Vec<u8>, ScriptError> {
    let mut sb = ScriptBuilder::new();
    sb.push_param(&ContractParameter::List(args.to_vec()))?;
    sb.push_string(method).app_call(contract, false);
    Ok(sb.into_bytes())
}

/// Compiles a token `transfer(from, to, amount)` call against the
/// contract at `contract`. `from` and `to` are Base58Check addresses.
pub fn transfer_script(
    contract: &Hash160,
    from: &str,
    to: &str,
    amount: &BigInt,
) -> Result<Vec<u8>, ScriptError> {
    invocation_script(
        contract,
        "transfer",
        &[
            ContractParameter::Literal(format!("(address){from}")),
            ContractParameter::Literal(format!("(address){to}")),
            ContractParameter::Integer(amount.clone()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op_code::OpCode;

    const CONTRACT: [u8; 20] = [0x42; 20];

    #[test]
    fn invocation_layout_for_no_args() {
        let script = invocation_script(&Hash160::new(CONTRACT), "name", &[]).unwrap();
        // PUSH0 (empty arg list), "name", APPCALL + hash
        assert_eq!(script[0], OpCode::PUSH0 as u8);
        assert_eq!(script[1], 4);
        assert_eq!(&script[2..6], b"name");
        assert_eq!(script[6], OpCode::APPCALL as u8);
        assert_eq!(&script[7..], CONTRACT);
    }

    #[test]
    fn arguments_precede_method_name() {
        let script = invocation_script(
            &Hash160::new(CONTRACT),
            "balanceOf",
            &[ContractParameter::Literal(format!("(bytes){}", "aa".repeat(20)))],
        )
        .unwrap();
        // 20-byte arg, PUSH1 count, PACK, then the method name.
        assert_eq!(script[0], 20);
        assert_eq!(script[21], OpCode::PUSH1 as u8);
        assert_eq!(script[22], OpCode::PACK as u8);
        assert_eq!(script[23], 9);
        assert_eq!(&script[24..33], b"balanceOf");
    }

    #[test]
    fn transfer_script_orders_args_amount_first() {
        let addr = "AceQbAj2xuFLiH5hQAHMnV39wtmjUKiVRj";
        let script =
            transfer_script(&Hash160::new(CONTRACT), addr, addr, &BigInt::from(7)).unwrap();
        // Reversed push order puts the amount on first.
        assert_eq!(script[0], OpCode::PUSH7 as u8);
        // Then the two 20-byte address hashes.
        assert_eq!(script[1], 20);
        assert_eq!(
            hex::encode(&script[2..22]),
            "e4f124b1c3b23553f07cebfb852b2a60aa6c6d94"
        );
        assert_eq!(script[22], 20);
        // Count + PACK + "transfer" + APPCALL.
        assert_eq!(script[43], OpCode::PUSH3 as u8);
        assert_eq!(script[44], OpCode::PACK as u8);
        assert_eq!(script[45], 8);
        assert_eq!(&script[46..54], b"transfer");
        assert_eq!(script[54], OpCode::APPCALL as u8);
    }

    #[test]
    fn bad_address_surfaces_parameter_error() {
        let err = transfer_script(
            &Hash160::new(CONTRACT),
            "not-an-address",
            "also-bad",
            &BigInt::from(1),
        )
        .unwrap_err();
        assert!(matches!(err, ScriptError::BadParameter(_)));
    }
}
