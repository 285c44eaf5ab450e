//! Template tables
//!
//! Canned copy keyed by content type and tone (content variations) or by
//! content type, platform and tone (creatives). Placeholders are filled by
//! [`BriefTokens::render`](crate::creative::vocabulary::BriefTokens::render).

use crate::creative::types::{ContentType, Platform, Tone};

/// Used when no `(type, tone)` entry exists
pub const GENERIC_TEMPLATES: &[&str] = &[
    "Introducing our {service} for {audience}. Built around {topic} and designed to deliver results you can measure. Learn more today.",
    "Looking for better {topic}? Our {service} helps {audience} work smarter. See how it fits your goals.",
    "Meet the {service} {audience} rely on. Simple to start, built to scale. Get started now.",
];

/// Content variation templates for a `(type, tone)` pair
pub fn content_templates(content_type: ContentType, tone: Tone) -> Option<&'static [&'static str]> {
    use ContentType::*;
    use Tone::*;

    let templates: &'static [&'static str] = match (content_type, tone) {
        (AdCopy, Professional) => &[
            "Discover the power of our {service}. Transform your business with proven results and expert support. Get started today with a free consultation.",
            "Experience excellence with our industry-leading {service}. Join thousands of satisfied customers who trust us for reliable, professional {topic}.",
            "Elevate your business performance with our comprehensive {service}. Designed for {audience} who demand quality and results.",
        ],
        (AdCopy, Casual) => &[
            "Hey there! 👋 Ready to make your life easier? Our amazing {service} is here to help. Join the fun and see what everyone's talking about!",
            "Life's too short for complicated {topic}. That's why we made the easiest {service} to get things done. Try it now!",
            "Looking for something awesome? You found it! 🚀 Our {service} makes everything better. Come see for yourself!",
        ],
        (AdCopy, Urgent) => &[
            "Last chance: our {service} offer ends this week. Join the {audience} already seeing results and claim your spot today.",
            "Don't wait. Prices on our {service} go up soon. Lock in your rate now.",
        ],
        (SocialPost, Professional) => &[
            "Exciting news! We're proud to announce our latest innovation in {topic}. This development represents months of research, designed to deliver exceptional value to our clients. #Innovation #BusinessGrowth #Excellence",
            "Industry insight: the landscape of {topic} continues to evolve rapidly. Our team is committed to staying ahead of these trends to better serve {audience}. What trends are you watching? #IndustryInsights #ThoughtLeadership",
        ],
        (SocialPost, Casual) => &[
            "OMG, you guys! 😍 We just launched something AMAZING and we can't contain our excitement! Our new {service} is going to change everything. Who's ready to try it? #Excited #NewLaunch #CommunityLove",
            "Friday vibes hit different when you love what you do! 💪 Our team has been working on something special for {audience} and we can't wait to share it. Stay tuned... 👀 #FridayFeels #TeamWork #ComingSoon",
        ],
        (SocialPost, Inspirational) => &[
            "Every big idea starts small. Here's to the {audience} building the future of {topic}, one step at a time. #Inspiration #Growth",
        ],
        (Email, Professional) => &[
            "Subject: An exclusive preview of our new {service}\n\nDear [Name],\n\nWe've built something with {audience} like you in mind. Our new {service} streamlines {topic} so your team can focus on what matters.\n\nWould you be available for a brief 15-minute demo this week?\n\nBest regards,\n[Your Name]",
            "Subject: Your {topic} results, simplified\n\nHi [Name],\n\nTeams using our {service} report faster turnaround and clearer reporting. I'd love to show you how.\n\nBest,\n[Your Name]\n\nTo unsubscribe from these emails, click here.",
        ],
        (Email, Casual) => &[
            "Subject: Psst... something new for you 🎉\n\nHey [Name]!\n\nWe just shipped a {service} that makes {topic} way less painful. Take it for a spin, we think you'll love it.\n\nCheers,\n[Your Name]",
        ],
        (LandingPage, Professional) => &[
            "The {service} for {audience}. Unify your {topic} workflow, measure what matters and scale with confidence. Start your free trial.",
            "Results, not guesswork. Our {service} gives {audience} the clarity to grow. Book a demo today.",
        ],
        (BlogPost, Professional) => &[
            "Five ways {audience} are rethinking {topic} this year, and what it means for how you choose a {service}.",
        ],
        (BlogPost, Inspirational) => &[
            "From first idea to lasting impact: how {audience} are using {topic} to build something that matters.",
        ],
        (BannerAd, Urgent) => &[
            "Ends Friday: save on our {service}. Act now.",
        ],
        _ => return None,
    };

    Some(templates)
}

/// Long-form creative copy for a `(type, platform, tone)` triple
pub fn creative_template(
    content_type: ContentType,
    platform: Platform,
    tone: Tone,
) -> Option<&'static str> {
    use ContentType as C;
    use Platform as P;
    use Tone as T;

    let template = match (content_type, platform, tone) {
        (C::AdCopy, P::Facebook, T::Professional) => {
            "Transform your business with cutting-edge {topic} tailored for {audience}. Our proven methodology delivers measurable results that drive sustainable growth.\n\nKey Benefits:\n✓ Advanced analytics and insights\n✓ Expert guidance and support\n✓ A {service} that scales with any size business\n\nJoin thousands of successful businesses who trust our {service}. Start your free trial today.\n\n[Learn More] [Start Free Trial]"
        }
        (C::AdCopy, P::Facebook, T::Casual) => {
            "Hey there! 👋 Looking to level up your {topic} game?\n\nWe've got a {service} that's helping tons of businesses just like yours get amazing results! 🚀\n\n• Super easy to use\n• See results fast ⚡\n• Amazing support team always ready to help\n\nThousands of happy customers can't be wrong. Why not give it a try?\n\n➡️ Get started for free"
        }
        (C::AdCopy, P::Facebook, T::Luxury) => {
            "Discover the pinnacle of {topic}.\n\nCrafted for discerning professionals who demand nothing but the finest, our exclusive {service} delivers unparalleled performance and prestige.\n\nExperience:\n• Bespoke solutions tailored to your vision\n• White-glove service and support\n• Exclusive access to premium features\n\nElevate your standards. Embrace excellence.\n\n[Request Private Demo]"
        }
        (C::SocialPost, P::Instagram, T::Casual) => {
            "✨ Behind the scenes magic happening! ✨\n\nWe've been working on something INCREDIBLE and honestly, we can barely contain our excitement! 😍\n\nOur new {service} is going to change everything for {audience}! 🙌\n\nStay tuned for the big reveal... 👀\n\n#ComingSoon #Innovation #Excited #CommunityLove #SmallBusiness #Entrepreneur"
        }
        (C::SocialPost, P::Instagram, T::Professional) => {
            "Industry Innovation Alert 📊\n\nWe're proud to announce our latest advancement in {topic}. This breakthrough represents months of dedicated research and development.\n\nKey highlights:\n• Enhanced performance metrics\n• Streamlined user experience\n• Industry-leading security standards\n\nThis innovation reinforces our commitment to delivering exceptional value to {audience}.\n\n#Innovation #Technology #BusinessGrowth #Industry #Leadership"
        }
        (C::Email, P::Email, T::Professional) => {
            "Subject: Introducing Our Latest Innovation - Exclusive Preview\n\nDear [Name],\n\nI hope this message finds you well. I'm excited to share a {service} our team has been developing with {audience} in mind.\n\nIt addresses the key challenges you've shared with us:\n\n✓ Streamlined operations and efficiency\n✓ Enhanced performance tracking\n✓ Robust security and compliance\n\nWould you be available for a brief 15-minute demo this week?\n\nBest regards,\n[Your Name]"
        }
        (C::BannerAd, P::GoogleAds, T::Professional) => {
            "{topic} for {audience}. Try our {service} free for 14 days."
        }
        _ => return None,
    };

    Some(template)
}

/// Number of mock images produced per content type
pub fn image_count(content_type: Option<ContentType>) -> usize {
    match content_type {
        Some(ContentType::BannerAd) => 3,
        Some(ContentType::SocialPost) => 2,
        _ => 4,
    }
}

/// Art-direction notes per content type; ad copy notes for unknown types
pub fn image_descriptions(content_type: Option<ContentType>) -> &'static [&'static str] {
    match content_type {
        Some(ContentType::SocialPost) => &[
            "Eye-catching graphic with bold colors and engaging text",
            "Behind-the-scenes candid moment with authentic feel",
        ],
        Some(ContentType::Email) => &[
            "Header banner with consistent brand styling",
            "Product feature highlights in grid layout",
            "Call-to-action focused imagery with clear messaging",
        ],
        Some(ContentType::LandingPage) => &[
            "Compelling hero banner with strong visual hierarchy",
            "Feature comparison infographic",
            "Customer testimonial with portrait",
            "Trust signals and security badges layout",
        ],
        Some(ContentType::BannerAd) => &[
            "Animated banner with smooth transitions",
            "Static display version with high contrast",
            "Mobile-optimized responsive variant",
        ],
        Some(ContentType::AdCopy) | Some(ContentType::BlogPost) | None => &[
            "Professional hero image with modern typography overlay",
            "Clean product showcase with minimal background",
            "Dynamic action shot emphasizing key benefits",
            "Lifestyle image showing product in real-world context",
        ],
    }
}
