// Placeholder image prompts. Replace `{business_name}` before sending.

pub const LOGO_PROMPT_TEMPLATE: &str = "Generate a concept for a modern, clean, and professional \
    logo for a business named \"{business_name}\". The logo should be simple, memorable, and \
    suitable for a digital brand. Use a minimalist style with abstract geometric shapes. \
    Display it on a plain white background.";

pub const COLOR_PALETTE_PROMPT_TEMPLATE: &str = "Create an image displaying a modern and \
    professional color palette for a brand named \"{business_name}\". The palette should \
    consist of 5 complementary colors, including a primary, secondary, and accent colors. \
    Show the colors as large swatches with their HEX codes clearly labeled below each swatch. \
    The overall feel should be trustworthy and innovative.";

pub const IMAGERY_PROMPT_TEMPLATE: &str = "Generate a high-quality, professional stock photo \
    that could be used on the website for \"{business_name}\". The image should be abstract \
    and conceptual, representing themes of innovation, solutions, and digital technology. \
    It should have a clean, bright, and optimistic aesthetic.";
