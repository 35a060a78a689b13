//! Testimonials collected from customers.

use crate::ids::ReviewId;
use crate::reviews::Review;

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    name: &str,
    location: &str,
    avatar: &str,
    rating: u8,
    date: &str,
    text: &str,
    product: &str,
) -> Review {
    Review {
        id: ReviewId::new(id),
        name: name.to_string(),
        location: location.to_string(),
        avatar: avatar.to_string(),
        rating,
        date: date.to_string(),
        text: text.to_string(),
        product: product.to_string(),
    }
}

pub(crate) fn builtin_reviews() -> Vec<Review> {
    vec![
        review(
            "1",
            "Diana Selsiya",
            "Chennai",
            "DS",
            5,
            "2025-11-20",
            "The first thing that impressed me was the packaging - the unique black cover looks \
             premium. The next is the taste obviously, even the non-tea lover got obsessed with \
             this unique taste. And you are maintaining the standard and consistency in all the \
             products. Thanks for bringing the authentic flavour straight from Assam!",
            "Premium Tea",
        ),
        review(
            "2",
            "Kamalammaal",
            "Trichy",
            "MA",
            5,
            "2025-11-10",
            "எனக்கு இப்போ 70 வயசு. இத்தனை வருஷம் தேனீர் குடிக்கிறேன், ஆனா இப்படி சுவையா இருக்கும் \
             தேயிலை பொடி நான் பார்த்ததே இல்லை. ஒரு முறை வெச்சா போதும், வீட்டுல எல்லாரும் 'என்ன புது \
             பொடி வாங்கினீங்க?'ன்னு கேட்டாங்க. நல்லா தூய்மையா, ருசியா இருக்கு. TeaHub-க்கு நன்றி \
             சொல்லணும் போல இருக்கு!",
            "Masala Tea",
        ),
        review(
            "3",
            "Wilson",
            "Coimbatore",
            "W",
            5,
            "2025-11-05",
            "இது கடைகள்ல கிடைக்குற பொடியை மாதிரி இல்ல. மணமும் சுவையும் தனியா தெரியுது. நான் \
             எப்பவும் சாம்பார், பொடி வாங்குறப்போ தேயிலை பொடியும் வாங்கிடுவேன். ஆனா இங்க \
             வாங்குனதுக்குப் பிறகு, 'இது தான் சரி'ன்னு fix ஆயிடுச்சு. குடும்பத்தாருக்கு எல்லாருக்கும் \
             பிடிச்சிருக்கு. நல்லா செயங்க!",
            "Premium Tea",
        ),
        review(
            "4",
            "Sruthi",
            "Kerala",
            "SR",
            5,
            "2025-10-28",
            "Tea is nice. Thickness feels great. Loved it!",
            "Premium Tea Powder",
        ),
        review(
            "5",
            "Dhivya Shreetha",
            "Coimbatore",
            "DS",
            5,
            "2025-10-20",
            "The tea was really good. Perfect flavor!",
            "Organic Green Tea",
        ),
    ]
}
