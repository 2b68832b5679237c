use tessera_base::{AddressVersion, BinDecode, BinEncode, BinRead, BinWrite, DecodeError, Hash160};
use tessera_script::OpCode;

/// Upper bound on either witness script, matching the VM's script cap.
const MAX_WITNESS_SCRIPT: u64 = 65_536;

/// Proof of authorization for one script hash: the invocation script
/// pushes arguments (typically signatures) and the verification script
/// consumes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Witness {
    pub invocation: Vec<u8>,
    pub verification: Vec<u8>,
}

impl Witness {
    pub fn new(invocation: Vec<u8>, verification: Vec<u8>) -> Self {
        Self {
            invocation,
            verification,
        }
    }

    /// The account this witness answers for.
    pub fn script_hash(&self) -> Hash160 {
        Hash160::from_script(&self.verification)
    }

    pub fn address(&self) -> String {
        self.script_hash().to_address(AddressVersion::LEDGER)
    }

    /// Whether the verification script is the canonical single-signature
    /// form: a 33-byte key push followed by CHECKSIG.
    pub fn is_standard(&self) -> bool {
        self.verification.len() == 35
            && self.verification[0] == 33
            && self.verification[34] == OpCode::CHECKSIG as u8
    }
}

impl BinEncode for Witness {
    fn bin_encode<W: BinWrite>(&self, w: &mut W) {
        w.write_var_bytes(&self.invocation);
        w.write_var_bytes(&self.verification);
    }
}

impl BinDecode for Witness {
    fn bin_decode<R: BinRead>(r: &mut R) -> Result<Self, DecodeError> {
        Ok(Self {
            invocation: r.read_var_bytes(MAX_WITNESS_SCRIPT)?,
            verification: r.read_var_bytes(MAX_WITNESS_SCRIPT)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_base::SliceReader;

    #[test]
    fn wire_form_round_trips() {
        let w = Witness::new(vec![0x40; 65], vec![0x21; 35]);
        let wire = w.to_wire_vec();
        assert_eq!(wire[0], 65);
        assert_eq!(wire[66], 35);

        let mut r = SliceReader::new(&wire);
        assert_eq!(Witness::bin_decode(&mut r).unwrap(), w);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn standard_shape_detection() {
        let mut verification = vec![33u8];
        verification.extend_from_slice(&[0x02; 33]);
        verification.push(OpCode::CHECKSIG as u8);
        assert!(Witness::new(Vec::new(), verification).is_standard());

        assert!(!Witness::default().is_standard());
        assert!(!Witness::new(Vec::new(), vec![0u8; 35]).is_standard());
    }

    #[test]
    fn script_hash_covers_verification_only() {
        let verification = vec![0x21; 35];
        let a = Witness::new(vec![1, 2, 3], verification.clone());
        let b = Witness::new(Vec::new(), verification);
        assert_eq!(a.script_hash(), b.script_hash());
    }
}
