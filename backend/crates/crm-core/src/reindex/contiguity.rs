use crate::Lead;

/// True when the indices of `leads` are exactly `0..leads.len()`, in any
/// order and without duplicates.
pub fn is_contiguous(leads: &[Lead]) -> bool {
    let mut seen = vec![false; leads.len()];
    for lead in leads {
        let Ok(slot) = usize::try_from(lead.index) else {
            return false;
        };
        match seen.get_mut(slot) {
            Some(flag) if !*flag => *flag = true,
            _ => return false,
        }
    }
    true
}
