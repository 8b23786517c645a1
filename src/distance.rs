/// Per-operation costs for [`distance`]. The rest of the crate always uses
/// [`Costs::UNIT`]; the knobs exist so callers can weight deletions,
/// insertions, and substitutions independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Costs {
    pub del: usize,
    pub ins: usize,
    pub subst: usize,
}

impl Costs {
    pub const UNIT: Self = Self { del: 1, ins: 1, subst: 1 };
}

/// Edit distance between two char sequences under the given costs.
///
/// `equal` decides character equality, which lets callers fold case without
/// pre-transforming the inputs. Standard dynamic programming, O(|u|·|v|)
/// time and O(|v|) space; total over all inputs. Under unit costs the
/// result is in `[0, max(|u|, |v|)]` and symmetric in its arguments.
pub fn distance(
    u: &str,
    v: &str,
    costs: Costs,
    equal: impl Fn(char, char) -> bool,
) -> usize {
    let u: Vec<char> = u.chars().collect();
    let v: Vec<char> = v.chars().collect();

    // prev[j] = distance between u[..i] and v[..j] for the previous row i.
    let mut prev: Vec<usize> = (0..=v.len()).map(|j| j * costs.ins).collect();
    let mut curr = vec![0usize; v.len() + 1];

    for (i, &uc) in u.iter().enumerate() {
        curr[0] = (i + 1) * costs.del;
        for (j, &vc) in v.iter().enumerate() {
            let subst = if equal(uc, vc) { 0 } else { costs.subst };
            curr[j + 1] = (prev[j] + subst)
                .min(prev[j + 1] + costs.del)
                .min(curr[j] + costs.ins);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[v.len()]
}

/// Unit-cost, exact-equality distance. The form every caller in the search
/// path uses.
pub fn unit_distance(u: &str, v: &str) -> usize {
    distance(u, v, Costs::UNIT, |a, b| a == b)
}
