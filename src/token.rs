use rand::Rng;

/// Marker for even-valued hex digits and for the random tail.
const MARKER_EVEN: char = '_';
/// Marker for odd-valued hex digits.
const MARKER_ODD: char = '$';
/// Length of the marker core between the fences.
const CORE_LEN: usize = 50;
/// Fixed fence wrapped around both ends of the core.
pub const TOKEN_FENCE: &str = "_$_$_$_$_";

/// Produces the replacement tokens handed out by the obfuscator. Owns the
/// run-wide counter: strictly increasing, one value per generated token,
/// never reset mid-run.
pub struct TokenGenerator {
    counter: usize,
}

impl TokenGenerator {
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Consumes the next counter value and builds a 68-character token: the
    /// counter's lower-hex digits mapped to markers by parity, padded to 50
    /// characters with randomly chosen markers, fenced on both sides. The
    /// random tail is intentionally not reproducible across runs.
    pub fn next_token(&mut self) -> String {
        let value = self.counter;
        self.counter += 1;

        let mut core = String::with_capacity(CORE_LEN);
        for digit in format!("{:x}", value).chars() {
            let n = digit.to_digit(16).unwrap_or(0);
            core.push(if n % 2 == 0 { MARKER_EVEN } else { MARKER_ODD });
        }

        let mut rng = rand::thread_rng();
        while core.len() < CORE_LEN {
            core.push(if rng.gen_bool(0.5) { MARKER_EVEN } else { MARKER_ODD });
        }
        core.truncate(CORE_LEN);

        format!("{}{}{}", TOKEN_FENCE, core, TOKEN_FENCE)
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
