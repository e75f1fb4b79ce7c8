use arbitrary::{Arbitrary, Unstructured};

use crate::Hrp;
use crate::hrp::MAX_HRP_LEN;

impl<'a> Arbitrary<'a> for Hrp {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        // Keep it short so there's room left for a payload.
        let len = u.int_in_range(1..=MAX_HRP_LEN.min(16))?;
        let mut s = String::with_capacity(len);
        for _ in 0..len {
            // Map into the printable range, then fold uppercase down.
            let ch = (b'!' + u.int_in_range(0..=93u8)?).to_ascii_lowercase();
            s.push(ch as char);
        }
        Ok(Hrp::new(&s).expect("arbitrary: generated invalid hrp"))
    }
}
