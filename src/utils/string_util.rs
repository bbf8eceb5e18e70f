use crate::extract::extract_first_python_code_block;

pub trait StripCodeBlock {
    fn strip_code_block(&self) -> &str;
}

impl StripCodeBlock for str {
    fn strip_code_block(&self) -> &str {
        match extract_first_python_code_block(self) {
            Some(body) => body.trim(),
            None => self.trim(),
        }
    }
}
