use crate::convert::Case;

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub input: &'static str,
    pub expected: &'static str,
}

#[derive(Debug, Clone)]
pub struct SampleResult {
    pub case: Case,
    pub input: &'static str,
    pub expected: &'static str,
    pub actual: String,
}

impl SampleResult {
    pub fn passed(&self) -> bool {
        self.actual == self.expected
    }
}

pub const KEBAB: &[Sample] = &[
    Sample {
        input: "fooBarBAZ",
        expected: "foo-bar-baz",
    },
    Sample {
        input: "foo__bar  baz--qux",
        expected: "foo-bar-baz-qux",
    },
    Sample {
        input: "__foo-bar! ",
        expected: "foo-bar",
    },
    Sample {
        input: "getHTTPResponse",
        expected: "get-http-response",
    },
    Sample {
        input: "foo2Bar 3baz",
        expected: "foo2-bar-3baz",
    },
    Sample {
        input: "  --My__Test123--Case!! ",
        expected: "my-test123-case",
    },
];

pub const CAMEL: &[Sample] = &[
    Sample {
        input: "first name",
        expected: "firstName",
    },
    Sample {
        input: "user_id",
        expected: "userId",
    },
    Sample {
        input: "SCREEN_NAME",
        expected: "screenName",
    },
    Sample {
        input: "mobile-number",
        expected: "mobileNumber",
    },
];

/// Run every built-in sample through its converter
pub fn verify_all() -> Vec<SampleResult> {
    let mut results = Vec::with_capacity(KEBAB.len() + CAMEL.len());

    for (case, samples) in [(Case::Kebab, KEBAB), (Case::Camel, CAMEL)] {
        for sample in samples {
            results.push(SampleResult {
                case,
                input: sample.input,
                expected: sample.expected,
                actual: case.apply(sample.input),
            });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_samples_pass() {
        for result in verify_all() {
            assert!(
                result.passed(),
                "{} sample {:?} produced {:?}, expected {:?}",
                result.case,
                result.input,
                result.actual,
                result.expected
            );
        }
    }
}
