//! Static guidance content paired with each emotion: a short empathetic
//! reply and a Quranic verse with translations.
//!
//! The tables are total over [`EmotionLabel`] by construction; there is no
//! runtime fallback because the exhaustive matches leave nothing to fall
//! back from.

use rand::Rng;

use crate::emotion::{contains_negative_phrase, EmotionLabel};

/// A verse with its English and Bangla translations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerseEntry {
    pub verse: &'static str,
    pub translation: &'static str,
    pub bangla: &'static str,
}

/// Reply shown when the resolved emotion is sadness and the text carries a
/// negative phrase, regardless of which path produced the sadness.
const CORRECTED_SADNESS_REPLY: &str =
    "I notice you mentioned not feeling good. I'm here to support you through this. 💙";

/// The verse paired with an emotion.
pub fn verse_for(emotion: EmotionLabel) -> VerseEntry {
    match emotion {
        EmotionLabel::Joy => VerseEntry {
            verse: "فَإِنَّ مَعَ ٱلْعُسْرِ يُسْرًۭا",
            translation: "Indeed, with hardship [will be] ease. (Surah Ash-Sharh 94:6)",
            bangla: "নিশ্চয়ই কষ্টের সাথে রয়েছে স্বস্তি। (সূরা আশ-শারহ ৯৪:৬)",
        },
        EmotionLabel::Sadness => VerseEntry {
            verse: "وَلَا تَهِنُوا وَلَا تَحْزَنُوا وَأَنتُمُ ٱلْأَعْلَوْنَ إِن كُنتُم مُّؤْمِنِينَ",
            translation: "So do not weaken and do not grieve, and you will be superior if you are [true] believers. (Surah Al-Imran 3:139)",
            bangla: "তোমরা দুর্বল হয়ো না এবং দুঃখ করো না; যদি তোমরা মুমিন হও, তবে তোমরাই শ্রেষ্ঠ। (سورة آل عمران ٣:١٣٩)",
        },
        EmotionLabel::Anger => VerseEntry {
            verse: "وَٱلْكَـٰظِمِينَ ٱلْغَيْظَ وَٱلْعَافِينَ عَنِ ٱلنَّاسِ",
            translation: "Those who restrain anger and who pardon the people – and Allah loves the doers of good. (Surah Al-Imran 3:134)",
            bangla: "যারা রাগ সংবরণ করে এবং মানুষকে ক্ষমা করে – আল্লাহ সৎকর্মশীলদের ভালবাসেন। (سورة آل عمران ٣:١٣٤)",
        },
        EmotionLabel::Fear => VerseEntry {
            verse: "إِنَّ ٱللَّهَ مَعَ ٱلصَّـٰبِرِينَ",
            translation: "Indeed, Allah is with the patient. (Surah Al-Baqarah 2:153)",
            bangla: "নিশ্চয়ই আল্লাহ ধৈর্যশীলদের সাথে আছেন। (سورة البقرة ٢:١٥٣)",
        },
        EmotionLabel::Love => VerseEntry {
            verse: "إِنَّ ٱلَّذِينَ آمَنُوا۟ وَعَمِلُوا۟ ٱلصَّـٰلِحَـٰتِ سَيَجْعَلُ لَهُمُ ٱلرَّحْمَـٰنُ وُدًّۭا",
            translation: "Indeed, those who have believed and done righteous deeds – the Most Merciful will appoint for them affection. (Surah Maryam 19:96)",
            bangla: "নিশ্চয়ই যারা ঈমান এনেছে এবং সৎকর্ম করেছে, দয়াময় তাদের জন্য ভালোবাসা সৃষ্টি করবেন। (سورة مريم ١٩:٩٦)",
        },
        EmotionLabel::Surprise => VerseEntry {
            verse: "وَمَا تَدْرِى نَفْسٌۭ مَّاذَا تَكْسِبُ غَدًۭا",
            translation: "And no soul knows what it will earn tomorrow. (Surah Luqman 31:34)",
            bangla: "কোন প্রাণ জানে না আগামীকাল সে কী অর্জন করবে। (سورة لقمان ٣١:٣٤)",
        },
        EmotionLabel::Neutral => VerseEntry {
            verse: "ٱللَّهُ لَآ إِلَـٰهَ إِلَّا هُوَ ۚ لَهُ ٱلْأَسْمَآءُ ٱلْحُسْنَىٰ",
            translation: "Allah – there is no deity except Him. To Him belong the best names. (Surah Ta-Ha 20:8)",
            bangla: "আল্লাহ – তিনি ছাড়া কোনো উপাস্য নেই। সুন্দর নামসমূহ তাঁরই। (سورة طه ٢٠:٨)",
        },
    }
}

fn reply_candidates(emotion: EmotionLabel) -> [&'static str; 3] {
    match emotion {
        EmotionLabel::Joy => [
            "I sense happiness in your words! May your joy continue to flourish. 😊",
            "Your positive energy is uplifting! Remember to share this joy with others. 🌟",
            "It's wonderful to hear you're feeling joyful! Cherish these moments. ✨",
        ],
        EmotionLabel::Sadness => [
            "I'm sorry you're feeling this way. Remember that difficult times pass. 💙",
            "Your feelings are valid. It's okay to not be okay sometimes. 🌧️",
            "I hear the sadness in your words. You're not alone in this. 🤗",
        ],
        EmotionLabel::Anger => [
            "I understand your frustration. Taking a moment to breathe can help. 😤",
            "Anger is a natural emotion. Channeling it constructively is powerful. ⚡",
            "I sense your irritation. Let's work through these feelings together. 🌋",
        ],
        EmotionLabel::Fear => [
            "It's okay to feel afraid sometimes. Courage means moving forward despite fear. 🤝",
            "Your concerns are valid. Remember that you've overcome challenges before. 🛡️",
            "I hear the worry in your words. Let's break this down together. 🧩",
        ],
        EmotionLabel::Love => [
            "That's so heartwarming to hear! Love is one of life's greatest blessings. ❤️",
            "The love you're expressing is beautiful. Nurture these special feelings. 🌹",
            "Your words radiate affection! Cherish these meaningful connections. 💞",
        ],
        EmotionLabel::Surprise => [
            "Wow, that sounds unexpected! Life's surprises often bring growth. 😲",
            "Unexpected events can be unsettling. Let's process this together. 🔄",
            "Your surprise is understandable! Sometimes life takes unexpected turns. 🌈",
        ],
        EmotionLabel::Neutral => [
            "Thanks for sharing. I'm here to listen whenever you're ready to explore further. 🙂",
            "I appreciate you opening up. Let me know if you'd like to discuss anything specific. 🤔",
            "Your thoughts are valued. Feel free to share more about what's on your mind. 💭",
        ],
    }
}

/// Compose the empathetic reply for a resolved emotion.
///
/// Sadness on text with negative phrasing gets the fixed supportive reply;
/// every other combination picks one of three candidates at random.
pub fn reply_for(emotion: EmotionLabel, text: &str) -> String {
    if emotion == EmotionLabel::Sadness && contains_negative_phrase(text) {
        return CORRECTED_SADNESS_REPLY.to_string();
    }

    let candidates = reply_candidates(emotion);
    let index = rand::rng().random_range(0..candidates.len());
    candidates[index].to_string()
}
