//! Static registry of guided programs. Built once at first use, immutable
//! for the life of the process, no load step.

use crate::error::{Result, VibeflowError};
use crate::path::{DailySession, PathDefinition};
use crate::types::PracticeType;
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static CATALOG: OnceLock<Vec<PathDefinition>> = OnceLock::new();

/// All paths in catalog order.
pub fn paths() -> &'static [PathDefinition] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

/// Look up a path by id.
pub fn get(id: &str) -> Result<&'static PathDefinition> {
    paths()
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| VibeflowError::PathNotFound(id.to_string()))
}

// ---------------------------------------------------------------------------
// Authoring invariants
// ---------------------------------------------------------------------------

static ID_RE: OnceLock<Regex> = OnceLock::new();

fn id_re() -> &'static Regex {
    ID_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() || id.len() > 64 || !id_re().is_match(id) {
        return Err(VibeflowError::InvalidPathId(id.to_string()));
    }
    Ok(())
}

/// Check every catalog entry: valid unique ids, sessions numbered exactly
/// `1..=N` in ascending order. Callers of [`get`]/[`paths`] assume this
/// holds; the test suite runs it so catalog edits cannot rot the invariant.
pub fn validate() -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for path in paths() {
        validate_id(&path.id)?;
        if !seen.insert(path.id.as_str()) {
            return Err(VibeflowError::InvalidCatalog(format!(
                "duplicate id '{}'",
                path.id
            )));
        }
        for (i, session) in path.sessions.iter().enumerate() {
            if session.day != i as u32 + 1 {
                return Err(VibeflowError::InvalidCatalog(format!(
                    "path '{}': expected day {} at position {}, found day {}",
                    path.id,
                    i + 1,
                    i,
                    session.day
                )));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Catalog content
// ---------------------------------------------------------------------------

fn session(
    day: u32,
    title: &str,
    lesson: &str,
    practice_type: PracticeType,
    practice_details: &str,
    affirmation: &str,
) -> DailySession {
    DailySession {
        day,
        title: title.to_string(),
        lesson: lesson.to_string(),
        practice_type,
        practice_details: practice_details.to_string(),
        affirmation: affirmation.to_string(),
    }
}

fn path(
    id: &str,
    title: &str,
    duration_label: &str,
    theme: &str,
    description: &str,
    sessions: Vec<DailySession>,
) -> PathDefinition {
    PathDefinition {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        theme: theme.to_string(),
        duration_label: duration_label.to_string(),
        sessions,
    }
}

fn build_catalog() -> Vec<PathDefinition> {
    use PracticeType::{Exercise, Journal, Meditation, Reflection};

    vec![
        path(
            "anxiety-management",
            "Anxiety Management Path",
            "3 Days",
            "Anxiety",
            "Learn evidence-based techniques to understand, manage, and reduce anxiety in your daily life.",
            vec![
                session(
                    1,
                    "Understanding Your Anxiety",
                    "Anxiety is a normal human emotion, but when it becomes overwhelming, it can interfere with our lives. Today, we will explore what anxiety is, how it manifests in your body, and what your personal triggers are.",
                    Journal,
                    "Write down three situations from the past month where you felt anxious. What were the physical sensations? What thoughts were running through your mind?",
                    "I can observe my anxiety without judgment.",
                ),
                session(
                    2,
                    "Mindful Body Scan",
                    "Your body holds onto stress. A body scan meditation helps you notice physical sensations without reacting, fostering a sense of calm and grounding.",
                    Meditation,
                    "Find a quiet place and follow a 10-minute guided body scan meditation. Notice areas of tension and breathe into them, allowing them to soften.",
                    "My body is my anchor to the present moment.",
                ),
                session(
                    3,
                    "Challenging Anxious Thoughts",
                    "Anxious thoughts are often based on cognitive distortions. Today, we practice identifying and challenging these thoughts to see situations more clearly.",
                    Exercise,
                    "Use the CBT Thought Record tool to analyze one anxious thought you had today. Identify the distortion and write a more balanced alternative.",
                    "My thoughts are not always facts.",
                ),
            ],
        ),
        path(
            "inner-child-healing",
            "Inner Child Healing Path",
            "2 Days",
            "Trauma & Healing",
            "Gently reconnect with and heal your inner child through reflection, compassion, and reparenting exercises.",
            vec![
                session(
                    1,
                    "Meeting Your Inner Child",
                    "Your inner child is the part of you that holds your childhood experiences, emotions, and beliefs. Today, we begin the gentle process of acknowledging this part of yourself with curiosity and love.",
                    Reflection,
                    "Find a quiet space. Close your eyes and imagine yourself as a child. What do you see? What age are you? Simply observe without judgment. How does it feel to connect with this younger version of you?",
                    "I am here for my inner child with love and safety.",
                ),
                session(
                    2,
                    "A Letter to Your Younger Self",
                    "Communication is key to healing. Today, you will write a letter to your younger self, offering the words of comfort, validation, and support you may have needed back then.",
                    Journal,
                    "Write a letter starting with \"Dear Little Me...\". Tell your inner child that they are loved, seen, and that you are here to protect them now. What promises do you want to make to them?",
                    "I provide the love and support my inner child deserves.",
                ),
            ],
        ),
        path(
            "mindfulness-foundations",
            "Mindfulness Foundations Path",
            "1 Day",
            "Mindfulness",
            "Build a solid foundation in mindfulness to cultivate presence, focus, and a non-judgmental awareness.",
            vec![session(
                1,
                "What is Mindfulness?",
                "Mindfulness is the practice of paying attention to the present moment on purpose, without judgment. We will explore what this means and why it is a foundational skill for mental well-being.",
                Reflection,
                "For five minutes today, simply notice your breath. When your mind wanders, gently guide it back. Note how many times your mind wandered. There is no goal, just gentle observation.",
                "I am present in this moment.",
            )],
        ),
        path(
            "emotional-resilience",
            "Emotional Resilience",
            "7 Days",
            "Emotional Regulation",
            "Bounce back from stress and setbacks using grounding and validation tools.",
            vec![
                session(
                    1,
                    "Understanding Resilience",
                    "Emotional resilience is the ability to adapt to stressful situations. It's not about avoiding difficulty, but about navigating it and bouncing back. It's a skill we can all build.",
                    Journal,
                    "Think of a time you faced a difficult situation and got through it. What skills or strengths did you use? How did you feel afterward?",
                    "My ability to handle challenges is greater than I think.",
                ),
                session(
                    2,
                    "Naming Your Emotions",
                    "You can't regulate what you don't recognize. Naming your emotions (e.g., \"This is grief,\" \"I feel anxious\") reduces their power and is the first step toward managing them.",
                    Reflection,
                    "Pause three times today. Each time, ask \"What am I feeling right now?\" Name the emotion without judgment. Just notice it.",
                    "I can name my feelings without being consumed by them.",
                ),
                session(
                    3,
                    "The 5-4-3-2-1 Grounding Technique",
                    "When overwhelmed, grounding brings you back to the present moment. The 5-4-3-2-1 technique uses your senses to anchor you.",
                    Exercise,
                    "When you feel stressed, stop and name: 5 things you can see, 4 things you can feel, 3 things you can hear, 2 things you can smell, and 1 thing you can taste.",
                    "I am grounded and safe in the present moment.",
                ),
                session(
                    4,
                    "Building a Support System",
                    "Resilience is not built in isolation. Identifying people who support you is crucial for navigating tough times.",
                    Journal,
                    "List 3 people you can turn to for support. What kind of support does each person offer (e.g., a listening ear, practical advice, a good laugh)?",
                    "I am supported and connected to others.",
                ),
                session(
                    5,
                    "Acceptance and Letting Go",
                    "Radical acceptance means acknowledging reality without judgment. It doesn't mean you approve of it, but that you stop fighting what you cannot change.",
                    Meditation,
                    "Find a 5-minute guided meditation on acceptance. Focus on breathing into any resistance you feel and gently letting it go.",
                    "I accept what is, releasing what was, and have faith in what will be.",
                ),
                session(
                    6,
                    "Self-Compassion Break",
                    "Treating yourself with the same kindness you'd offer a friend is a core part of resilience. Today, we practice a structured self-compassion break.",
                    Exercise,
                    "When you feel stressed, place a hand on your heart and say: 1. \"This is a moment of suffering.\" 2. \"Suffering is a part of life.\" 3. \"May I be kind to myself in this moment.\"",
                    "I treat myself with kindness and compassion.",
                ),
                session(
                    7,
                    "Reflecting on Your Strengths",
                    "You've practiced several resilience skills this week. Today, we reflect on your inner resources and how you can carry them forward.",
                    Reflection,
                    "Look back at your journal entries from this week. What have you learned about yourself? What is one resilience skill you want to continue practicing?",
                    "I am resilient, and I grow stronger with every challenge.",
                ),
            ],
        ),
        path(
            "managing-anger",
            "Managing Anger",
            "5 Days",
            "Emotional Regulation",
            "Understand, defuse, and express anger in a healthy, non-harmful way.",
            vec![
                session(
                    1,
                    "What is Anger?",
                    "Anger is a messenger. It often signals that a boundary has been crossed or a need is unmet. Understanding its message is the first step to managing it.",
                    Journal,
                    "Describe a recent time you felt angry. What was the trigger? What was the underlying need or violated boundary?",
                    "My anger is a signal, and I can listen to its message.",
                ),
                session(
                    2,
                    "Physical Release",
                    "Anger creates a physical charge in the body. Healthy physical release can prevent it from turning into destructive behavior.",
                    Exercise,
                    "When you feel anger rising, try one of these: a brisk walk for 10 minutes, clenching and releasing your fists 10 times, or deep, slow breathing for 2 minutes.",
                    "I can move this energy through my body safely.",
                ),
                session(
                    3,
                    "The \"Pause\" Technique",
                    "The space between a trigger and a reaction is where your power lies. Practicing the \"pause\" builds this space.",
                    Reflection,
                    "Today, if you feel anger, consciously say \"Pause\" to yourself. Take three deep breaths before responding or acting. Note how this changes the outcome.",
                    "I have the power to pause before I react.",
                ),
                session(
                    4,
                    "\"I\" Statements",
                    "Expressing anger healthily involves clear, non-blaming communication. \"I\" statements focus on your feelings rather than accusing others.",
                    Journal,
                    "Reframe a recent angry thought from \"You always...\" to \"I feel [emotion] when [situation] because [need].\"",
                    "I can express my feelings clearly and respectfully.",
                ),
                session(
                    5,
                    "Finding the Emotion Underneath",
                    "Anger is often a \"secondary\" emotion, protecting us from more vulnerable feelings like sadness, hurt, or fear.",
                    Reflection,
                    "Think about the last time you were angry. Ask yourself, \"What vulnerable feeling might be underneath this anger?\" Sit with that feeling for a moment.",
                    "I am brave enough to feel what is beneath my anger.",
                ),
            ],
        ),
        path(
            "self-esteem-rebuilding",
            "Self-Esteem Rebuilding",
            "7 Days",
            "Self-Esteem & Identity",
            "Boost inner worth, set boundaries, and practice daily confidence rituals.",
            vec![
                session(
                    1,
                    "Your Inner Critic",
                    "We all have an inner critic. Today, we will learn to notice its voice without believing its stories.",
                    Journal,
                    "Listen for your inner critic today. Write down one thing it says. Then, write a compassionate response to it, as if you were talking to a friend.",
                    "I am more than the voice of my inner critic.",
                ),
                session(
                    2,
                    "Evidence Log",
                    "Low self-esteem often ignores evidence of our worth. We will actively look for it.",
                    Journal,
                    "At the end of the day, write down three things you did well, no matter how small. (e.g., \"I made a healthy breakfast,\" \"I was kind to a coworker,\" \"I finished a task.\")",
                    "I recognize my own competence and effort.",
                ),
                session(
                    3,
                    "Setting a Small Boundary",
                    "Boundaries are a powerful act of self-worth. They teach others how to treat us and affirm our own value.",
                    Exercise,
                    "Practice setting one small, low-stakes boundary today. This could be saying \"no\" to a small request, or simply stating \"I need a few minutes to myself.\"",
                    "My needs are valid, and I can express them.",
                ),
                session(
                    4,
                    "Values Alignment",
                    "Living in alignment with your core values builds authentic self-esteem. What is truly important to you?",
                    Journal,
                    "List your top 3-5 core values (e.g., kindness, creativity, honesty, adventure). How can you honor one of these values with a small action today?",
                    "I live a life that is true to me.",
                ),
                session(
                    5,
                    "Body Gratitude",
                    "Shifting from criticism to gratitude for our bodies can be transformative for self-esteem.",
                    Meditation,
                    "Do a 5-minute body gratitude meditation. Instead of focusing on appearance, thank your body for what it allows you to do (e.g., \"Thank you, legs, for carrying me.\").",
                    "I am grateful for my body and all it does for me.",
                ),
                session(
                    6,
                    "Accepting a Compliment",
                    "People with low self-esteem often deflect compliments. Today, we practice receiving them gracefully.",
                    Exercise,
                    "If you receive a compliment today, your only task is to respond with a simple \"Thank you.\" Notice how it feels to let the positive words in.",
                    "I am worthy of praise and kindness.",
                ),
                session(
                    7,
                    "Letter of Self-Appreciation",
                    "To conclude our week, you will integrate these lessons by writing a letter of appreciation to yourself.",
                    Journal,
                    "Write a short letter to yourself, acknowledging your strengths, your efforts this week, and your inherent worth. Seal it to read on a difficult day.",
                    "I deeply and completely love and accept myself.",
                ),
            ],
        ),
        path(
            "authentic-self-discovery",
            "Authentic Self Discovery",
            "5 Days",
            "Self-Esteem & Identity",
            "Get in touch with your true self beneath roles and expectations.",
            vec![
                session(
                    1,
                    "Shedding the Masks",
                    "We all wear masks or play roles. Today is about noticing them.",
                    Journal,
                    "List the different \"roles\" you play (e.g., employee, parent, friend). What mask do you wear for each? Who are you when you're alone?",
                    "It is safe for me to be my authentic self.",
                ),
                session(
                    2,
                    "Childhood Joys",
                    "What did you love to do as a child, before you were told what you \"should\" be?",
                    Reflection,
                    "Think back to what brought you pure joy as a child (e.g., drawing, building forts, being in nature). How can you incorporate a small piece of that joy into your life this week?",
                    "My inner child knows the way to joy.",
                ),
                session(
                    3,
                    "Following Curiosity",
                    "Authenticity is fueled by curiosity. What are you genuinely curious about right now?",
                    Exercise,
                    "Spend 15 minutes today exploring something you're curious about with no goal in mind. Watch a documentary, read an article, or browse a topic online.",
                    "I follow the whispers of my curiosity.",
                ),
                session(
                    4,
                    "Your \"No\" is Sacred",
                    "Knowing what you stand for means knowing what you won't stand for. Your \"no\" defines your \"yes\".",
                    Journal,
                    "Write about a time you said \"yes\" when you wanted to say \"no.\" How did it feel? What would it feel like to honor your \"no\" in the future?",
                    "Saying \"no\" to others can be saying \"yes\" to myself.",
                ),
                session(
                    5,
                    "Your Authentic Bill of Rights",
                    "You have the right to be you. Let's put it in writing.",
                    Journal,
                    "Create your own \"Authentic Bill of Rights.\" Include statements like: \"I have the right to change my mind,\" \"I have the right to put my needs first,\" \"I have the right to be imperfect.\"",
                    "I give myself permission to be fully me.",
                ),
            ],
        ),
        path(
            "letting-go-of-the-past",
            "Letting Go of the Past",
            "7 Days",
            "Healing & Recovery",
            "Use reflection, release techniques, and forgiveness to move forward.",
            vec![
                session(
                    1,
                    "Acknowledging the Weight",
                    "The first step to letting go is acknowledging what you are carrying.",
                    Journal,
                    "Write down a memory, belief, or resentment you are holding onto. Describe how it feels in your body to carry this weight.",
                    "I acknowledge what I am carrying without judgment.",
                ),
                session(
                    2,
                    "The Story I Tell Myself",
                    "We often replay a story about the past. What is your story, and is it serving you?",
                    Journal,
                    "Write out the story of a past event that still bothers you. Then, ask: \"Is there another way to see this? What did I learn from this experience?\"",
                    "I can change the story I tell myself about the past.",
                ),
                session(
                    3,
                    "Cutting the Cord Meditation",
                    "Visualization is a powerful tool for release.",
                    Meditation,
                    "Find a quiet space. Visualize the person or event you wish to release from. Imagine a cord connecting you. See yourself lovingly, but firmly, cutting that cord and wishing them well.",
                    "I release what no longer serves me.",
                ),
                session(
                    4,
                    "Forgiveness for Yourself",
                    "Often, the hardest person to forgive is ourselves. Forgiveness is not excusing behavior; it is releasing the burden.",
                    Journal,
                    "Write a letter of forgiveness to yourself for a past mistake. Offer yourself the same compassion you would a friend.",
                    "I forgive myself and release myself from the past.",
                ),
                session(
                    5,
                    "Focusing on the Present",
                    "Letting go happens in the now. The more we anchor in the present, the less power the past has.",
                    Exercise,
                    "Practice a \"Mindful Minute.\" For 60 seconds, bring all your attention to one sense. What do you see right now? What do you hear? What do you feel?",
                    "My power is in the present moment.",
                ),
                session(
                    6,
                    "Creating a New Future",
                    "Letting go creates space. What do you want to fill that space with?",
                    Journal,
                    "Write about one small thing you can do this week that aligns with the future you want, not the past you are leaving behind.",
                    "I am the creator of my future.",
                ),
                session(
                    7,
                    "Release Ritual",
                    "A physical ritual can symbolize emotional release.",
                    Exercise,
                    "Write what you are letting go of on a piece of paper. Safely burn it, tear it up, or bury it in the earth. As you do, state aloud: \"I release this with love and gratitude.\"",
                    "I am free.",
                ),
            ],
        ),
        path(
            "healing-toxic-relationships",
            "Healing from Toxic Relationships",
            "10 Days",
            "Healing & Recovery",
            "Rebuild inner safety, trust, and self-identity after emotional harm.",
            vec![
                session(
                    1,
                    "Recognizing the Impact",
                    "Understanding how a toxic relationship affected you is the first step. This is about validation, not blame.",
                    Journal,
                    "In a safe space, list some of the ways the relationship impacted your self-esteem, your trust in others, or your sense of safety. Acknowledge the hurt.",
                    "I validate my own experiences and feelings.",
                ),
                session(
                    2,
                    "Reclaiming Your Narrative",
                    "Toxic relationships often warp our sense of self. It's time to rewrite your story.",
                    Journal,
                    "Write down three positive qualities about yourself that have nothing to do with the relationship. For each quality, write a sentence about how you can express it today.",
                    "I am redefining who I am on my own terms.",
                ),
                session(
                    3,
                    "Setting Energetic Boundaries",
                    "Even if you are no longer in contact, you can set energetic boundaries to protect your peace.",
                    Meditation,
                    "Visualize a shield of protective light around you. See it deflecting any negative energy, thoughts, or memories related to the past relationship. Hold this image for 5 minutes.",
                    "My energy is sacred, and I am in control of it.",
                ),
                session(
                    4,
                    "Identifying Healthy Patterns",
                    "To avoid repeating history, we must define what \"healthy\" looks like for us.",
                    Journal,
                    "List 5 characteristics of a healthy relationship (with anyone - friends, family, partners). Examples: mutual respect, open communication, feeling safe.",
                    "I attract and cultivate healthy, respectful relationships.",
                ),
                session(
                    5,
                    "Rebuilding Self-Trust",
                    "Toxic dynamics can make us doubt our own judgment. We can learn to trust ourselves again.",
                    Exercise,
                    "Make one small decision today (e.g., what to eat, what to wear) and consciously trust your choice without second-guessing it. Say to yourself, \"I trust my judgment.\"",
                    "I am learning to trust my intuition again.",
                ),
                session(
                    6,
                    "The Grieving Process",
                    "It's okay to grieve the good parts of a toxic relationship, or the future you thought you would have. Grief is part of healing.",
                    Reflection,
                    "Allow yourself to feel any sadness or loss today without judgment. What do you need to feel comforted? A warm blanket? A cup of tea? A good cry?",
                    "I allow myself to grieve and heal in my own time.",
                ),
                session(
                    7,
                    "A Letter You Don't Send",
                    "Writing can be a powerful tool for processing complex emotions without needing to engage.",
                    Journal,
                    "Write a raw, honest letter to the person from the toxic relationship. Say everything you need to say. Then, delete it or tear it up. This is for you, not for them.",
                    "I release my unspoken words and free myself.",
                ),
                session(
                    8,
                    "Cultivating Self-Soothing",
                    "Learning to be your own source of comfort is a superpower.",
                    Exercise,
                    "Create a \"self-soothing\" kit. This could be a mental list or a physical box with things that calm your senses: a favorite scent, a soft texture, a calming song, a comforting taste.",
                    "I can be my own safe space.",
                ),
                session(
                    9,
                    "Finding Joy in Solitude",
                    "Reconnecting with yourself and finding joy in your own company is a vital part of healing.",
                    Reflection,
                    "Schedule 30 minutes of \"me time\" today. Do something you genuinely enjoy, by yourself. Notice the feeling of peace and independence.",
                    "I enjoy my own company and cherish my solitude.",
                ),
                session(
                    10,
                    "Looking Forward with Hope",
                    "Healing is not about forgetting, but about integrating the lessons so you can look forward with wisdom and hope.",
                    Journal,
                    "Write about one thing you are looking forward to in your future that is just for you. What is one step you can take towards it this month?",
                    "My past has prepared me for a beautiful future.",
                ),
            ],
        ),
        path(
            "cbt-starter",
            "CBT Starter",
            "7 Days",
            "Mental Skills & Focus",
            "Introduce core CBT tools for identifying and reframing thoughts.",
            vec![
                session(
                    1,
                    "Thoughts Are Not Facts",
                    "The foundation of CBT is that our thoughts, feelings, and behaviors are connected. We begin by learning to observe our thoughts as separate from ourselves.",
                    Reflection,
                    "Today, when you have a strong feeling, practice saying, \"I am having the thought that...\" before the thought. Example: Instead of \"I'm a failure,\" try \"I am having the thought that I am a failure.\" Notice the distance this creates.",
                    "I am the observer of my thoughts.",
                ),
                session(
                    2,
                    "The Thought-Feeling Link",
                    "How we think directly impacts how we feel. Today we practice identifying this link in real-time.",
                    Journal,
                    "Use the CBT Thought Record tool for one event today. Fill out only the \"Trigger,\" \"Automatic Thought,\" and \"Emotion\" sections. See the direct connection.",
                    "My thoughts influence my feelings, and I can influence my thoughts.",
                ),
                session(
                    3,
                    "Identifying Cognitive Distortions",
                    "Our brains use mental shortcuts that are often unhelpful. These are \"cognitive distortions.\" Today we learn to spot one: All-or-Nothing thinking.",
                    Exercise,
                    "Listen for \"all-or-nothing\" words today (always, never, everyone, nobody, perfect, failure). When you spot one, challenge it by asking, \"Is that 100% true?\"",
                    "I am moving from black-and-white thinking to seeing the shades of gray.",
                ),
                session(
                    4,
                    "Distortion Detective: Mind Reading",
                    "Mind reading is assuming you know what others are thinking without any real evidence. This distortion fuels social anxiety.",
                    Journal,
                    "Think of a recent situation where you assumed someone was thinking negatively about you. Ask yourself: \"What is the evidence for this thought? What are some alternative explanations?\"",
                    "I cannot read minds, and others cannot read mine.",
                ),
                session(
                    5,
                    "Distortion Detective: Fortune Telling",
                    "Fortune telling is predicting a negative outcome with certainty. We treat our prediction as a fact.",
                    Reflection,
                    "Catch yourself predicting a negative future today. Ask, \"What is the worst that could happen? What is the best? What is most realistic?\"",
                    "I cannot predict the future, so I will focus on the present.",
                ),
                session(
                    6,
                    "Generating a Balanced Thought",
                    "A balanced thought is not \"toxic positivity.\" It's a more realistic, compassionate, and helpful perspective.",
                    Exercise,
                    "Take one negative thought from this week. Write it down. Now, write a new thought that is more balanced and kind. Use the AI suggestion tool in the CBT record for help if needed.",
                    "I can find a more balanced and helpful way to see this.",
                ),
                session(
                    7,
                    "Putting It All Together",
                    "CBT is a practice. Today, we review the full cycle from thought to balanced thought.",
                    Journal,
                    "Complete one full CBT Thought Record, from trigger to balanced thought. Notice how changing the thought can change the associated feeling and behavior.",
                    "I have the power to challenge and reframe my thoughts.",
                ),
            ],
        ),
        path(
            "focus-clarity-booster",
            "Focus & Clarity Booster",
            "5 Days",
            "Mental Skills & Focus",
            "Clear mental clutter and improve focus through mindfulness hacks.",
            vec![
                session(
                    1,
                    "The \"Brain Dump\"",
                    "Mental clutter kills focus. A \"brain dump\" gets all your nagging to-dos, worries, and ideas out of your head and onto paper.",
                    Journal,
                    "Set a timer for 10 minutes. Write down everything and anything that is on your mind. Don't organize or edit it. Just get it out.",
                    "I am clearing my mind to make space for focus.",
                ),
                session(
                    2,
                    "Single-Tasking",
                    "Multitasking is a myth. It's actually \"task-switching,\" and it drains your mental energy. Today, we practice single-tasking.",
                    Exercise,
                    "Choose one important task. Set a timer for 25 minutes (Pomodoro Technique). Work only on that task. When the timer rings, take a 5-minute break.",
                    "I give my full attention to one thing at a time.",
                ),
                session(
                    3,
                    "Mindful Breathing for Focus",
                    "A few moments of mindful breathing can reset your brain and bring your attention back to the present.",
                    Meditation,
                    "Before starting a work block, close your eyes and take 5 deep, slow breaths. Focus only on the sensation of the air moving in and out.",
                    "My breath is my anchor to the present moment.",
                ),
                session(
                    4,
                    "Digital Boundaries",
                    "Notifications are focus-killers. Today, we create a small bubble of digital peace.",
                    Exercise,
                    "Turn off all non-essential notifications on your phone and computer for at least one hour. Notice the difference in your ability to concentrate.",
                    "I am in control of my attention.",
                ),
                session(
                    5,
                    "The \"Two-Minute\" Rule",
                    "Procrastination clutters our minds. The \"two-minute rule\" helps clear small tasks quickly.",
                    Reflection,
                    "Identify a task you've been putting off. If it can be done in two minutes or less, do it immediately. Enjoy the feeling of mental space you've created.",
                    "I create momentum by taking small, immediate actions.",
                ),
            ],
        ),
        path(
            "stress-detox",
            "Stress Detox",
            "5 Days",
            "Lifestyle & Balance",
            "Reduce overwhelm with daily calming rituals and nervous system resets.",
            vec![
                session(
                    1,
                    "Identify Your Stressors",
                    "Awareness is the first step. What are the primary sources of stress in your life right now?",
                    Journal,
                    "Categorize your stressors into three columns: 1. Things I can control. 2. Things I can influence. 3. Things I cannot control.",
                    "I focus my energy on what I can control.",
                ),
                session(
                    2,
                    "Nervous System Reset: Sighing",
                    "A physiological sigh (a double inhale followed by a long exhale) is one of the fastest ways to calm your nervous system.",
                    Exercise,
                    "Throughout the day, whenever you feel a wave of stress, take a moment to perform 1-3 physiological sighs. Inhale through the nose, then take another short inhale, then exhale slowly through the mouth.",
                    "I can calm my body and mind with my breath.",
                ),
                session(
                    3,
                    "Mindful Movement",
                    "Stress gets trapped in the body. Gentle, mindful movement helps release it.",
                    Meditation,
                    "Do a 10-minute mindful stretching session. Pay close attention to the sensations in your muscles as you stretch. Don't push, just breathe into the feelings.",
                    "I release tension from my body with gentle movement.",
                ),
                session(
                    4,
                    "Sensory Soothing",
                    "Engaging your senses can pull you out of a stress spiral. What is calming for your senses?",
                    Reflection,
                    "Make a list of \"sensory soothers\" for each sense. Sight: a plant. Sound: a favorite song. Smell: essential oil. Touch: a soft blanket. Taste: a cup of herbal tea. Use one today.",
                    "I can soothe my nervous system through my senses.",
                ),
                session(
                    5,
                    "The \"Worry Window\"",
                    "Constant worrying is draining. A \"worry window\" contains it.",
                    Journal,
                    "Schedule a 10-minute \"worry window\" for later today. If a worry comes up before then, jot it down and tell yourself, \"I will think about this at [time].\" During the window, let yourself worry freely. When it's over, move on.",
                    "I am in charge of when and how I engage with my worries.",
                ),
            ],
        ),
        path(
            "digital-mindfulness",
            "Digital Mindfulness",
            "4 Days",
            "Lifestyle & Balance",
            "Rebuild healthy screen habits and reclaim your attention span.",
            vec![
                session(
                    1,
                    "The Awareness Audit",
                    "The first step is to become aware of your current digital habits without judgment.",
                    Reflection,
                    "For one day, simply notice how many times you pick up your phone. What is the trigger? Is it boredom, anxiety, or a specific need? Don't change anything yet, just observe.",
                    "I am aware of my digital habits.",
                ),
                session(
                    2,
                    "Mindful Entry",
                    "We often unlock our phones on autopilot. Today, we create a \"mindful entry\" point.",
                    Exercise,
                    "Before unlocking your phone or opening a social media app, take one deep breath and ask yourself, \"What is my intention?\" This small pause breaks the habit loop.",
                    "I use my devices with intention.",
                ),
                session(
                    3,
                    "Curate Your Feed",
                    "Your digital space affects your mental space. It's time to do some gardening.",
                    Exercise,
                    "Spend 15 minutes unfollowing or muting accounts that make you feel anxious, inadequate, or angry. Follow 3 new accounts that are inspiring, calming, or educational.",
                    "I curate a digital environment that supports my well-being.",
                ),
                session(
                    4,
                    "Tech-Free Transition",
                    "The first and last hour of the day are crucial for mental health. Let's protect them.",
                    Journal,
                    "Tonight, put your phone away at least 30 minutes before you plan to sleep. In the morning, wait at least 15 minutes before checking it. Journal about how this changes your state of mind.",
                    "I create tech-free space to begin and end my day in peace.",
                ),
            ],
        ),
        path(
            "compassion-practice",
            "Compassion Practice",
            "5 Days",
            "Spiritual & Inner Growth",
            "Cultivate kindness, empathy, and gentle presence for yourself and others.",
            vec![
                session(
                    1,
                    "What is Compassion?",
                    "Compassion is not pity. It is the practice of recognizing suffering and responding with kindness. It starts with ourselves.",
                    Reflection,
                    "Think of a time you were hard on yourself. Now, imagine a dear friend was in the same situation. What would you say to them? Write down those kind words.",
                    "I can offer myself the same compassion I offer to others.",
                ),
                session(
                    2,
                    "Loving-Kindness Meditation for Self",
                    "We will use traditional phrases to actively cultivate feelings of kindness towards ourselves.",
                    Meditation,
                    "Find a comfortable seat. For 5 minutes, silently repeat these phrases to yourself: \"May I be safe. May I be happy. May I be healthy. May I live with ease.\"",
                    "I am worthy of my own love and kindness.",
                ),
                session(
                    3,
                    "Extending Compassion to a Loved One",
                    "Now we extend the circle of compassion outwards to someone we care about deeply.",
                    Meditation,
                    "Bring a loved one to mind. For 5 minutes, repeat the phrases for them: \"May you be safe. May you be happy. May you be healthy. May you live with ease.\"",
                    "I wish for the happiness and well-being of others.",
                ),
                session(
                    4,
                    "Compassion for a Neutral Person",
                    "The practice expands our capacity when we offer compassion to someone we don't have strong feelings about.",
                    Exercise,
                    "Think of a neutral person you encounter in your daily life (e.g., a cashier, a bus driver). Hold them in your mind and offer them the same loving-kindness phrases for 2-3 minutes.",
                    "My capacity for compassion is growing.",
                ),
                session(
                    5,
                    "Common Humanity",
                    "The ultimate practice of compassion is recognizing that everyone, just like us, wants to be happy and free from suffering.",
                    Journal,
                    "Reflect on a recent challenge. Now, consider how many other people in the world might be facing a similar struggle. Write about this shared \"common humanity.\" How does it make you feel?",
                    "Just like me, others want to be happy. Just like me, others feel pain. We are connected.",
                ),
            ],
        ),
        path(
            "gratitude-pathway",
            "Gratitude Pathway",
            "3 Days",
            "Spiritual & Inner Growth",
            "Daily reflections to build appreciation and elevate your emotional state.",
            vec![
                session(
                    1,
                    "Three Good Things",
                    "Gratitude rewires our brain to notice the positive. The \"Three Good Things\" exercise is a simple, powerful way to start.",
                    Journal,
                    "Before bed, write down three things that went well today and your role in them. They can be very small (e.g., \"I enjoyed my coffee this morning because I took the time to make it.\").",
                    "I notice the good that surrounds me.",
                ),
                session(
                    2,
                    "Sensory Gratitude",
                    "Today we practice gratitude through our senses, anchoring us in the present moment.",
                    Reflection,
                    "Throughout your day, find one thing to be grateful for with each sense. A beautiful sight, a pleasant sound, a comforting touch, a delicious taste, a lovely smell.",
                    "I am grateful for the simple gifts of my senses.",
                ),
                session(
                    3,
                    "A Letter of Gratitude",
                    "Expressing gratitude to others amplifies its effects for both the giver and receiver.",
                    Journal,
                    "Write a short letter to someone you are grateful for. You don't have to send it. Focus on specifically why you are thankful for them and what they mean to you.",
                    "My heart is filled with gratitude for the people in my life.",
                ),
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
