//! Fixed user-facing wording returned by the tools.

pub const AI_TEXT_CREDENTIAL: &str = "The API key is required to use the Winston AI text detection tool. Please provide the API key for the Winston AI API. Ask the user to provide his Winston AI API key.";
pub const AI_IMAGE_CREDENTIAL: &str = "The API key is required to use the WinstonAI AI image detection tool. Please provide the API key for the Winston AI API. Ask the user to provide his Winston AI API key.";
pub const PLAGIARISM_CREDENTIAL: &str = "The API key is required to use the WinstonAI plagiarism detection tool. Please provide the API key for the Winston AI API.";
pub const TEXT_COMPARE_CREDENTIAL: &str = "The API key is required to use the WinstonAI text comparison tool. Please provide the API key for the Winston AI API.";

pub const AI_TEXT_FAILED: &str = "There was an error while detecting the AI content in the text. Make sure your text is longuer than 300 characters and it is in a supported language. We currently support English, French, Spanish, German, Italian, Portuguese, Dutch, Tagalog, Italian, Polish and Indonesian.";
pub const AI_IMAGE_FAILED: &str = "There was an error while detecting the AI content in the image. Make sure the URL is valid and the image is at least 256x256 pixels.";
pub const PLAGIARISM_FAILED: &str =
    "There was an error while detecting the plagiarism in the text, please try again.";
pub const TEXT_COMPARE_FAILED: &str =
    "There was an error while detecting the similarity between the two texts, please try again.";

pub const AI_TEXT_REQUIRED: &str = "The text is required to use the AI text detection tool. Please provide the text to detect AI content in.";
pub const AI_TEXT_TOO_SHORT: &str = "The text must be at least 300 characters long.";
pub const AI_TEXT_TOO_LONG: &str = "The text must be less than 150 000 characters long.";

pub const AI_IMAGE_URL_REQUIRED: &str = "The URL is required to use the AI image detection tool. Please provide the URL of the image to detect AI content in.";
pub const AI_IMAGE_URL_INVALID: &str =
    "The URL must be a valid http or https URL pointing to the image to scan.";

pub const PLAGIARISM_TEXT_REQUIRED: &str = "The text is required to use the plagiarism detection tool. Please provide the text to detect plagiarism in.";
pub const PLAGIARISM_TEXT_TOO_SHORT: &str = "The text must be at least 100 characters long.";
pub const PLAGIARISM_TEXT_TOO_LONG: &str = "The text must be less than 120 000 characters long.";

pub const TEXT_COMPARE_FIRST_REQUIRED: &str = "The first text is required to use the text comparison tool. Please provide the first text to compare.";
pub const TEXT_COMPARE_SECOND_REQUIRED: &str = "The second text is required to use the text comparison tool. Please provide the second text to compare.";
pub const TEXT_COMPARE_TOO_LONG: &str = "Each text must be less than 120 000 characters long.";
